// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Win credit accumulator.
use std::ops;

/// Accumulates the winners of a number of iterations.
///
/// The tally keeps, for each player, an integer count of the iterations won
/// as part of a `w`-ways split, so that fractional credit is exact and tallies
/// from different workers can be merged in any order with identical totals.
/// Players are identified by their index in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    players: usize,
    iterations: u64,
    // splits[player * players + ways - 1]
    splits: Vec<u64>,
}

impl Tally {
    /// Creates an empty tally for the given number of players.
    pub fn new(players: usize) -> Self {
        Self {
            players,
            iterations: 0,
            splits: vec![0; players * players],
        }
    }

    /// The number of players.
    pub fn players(&self) -> usize {
        self.players
    }

    /// The number of recorded iterations.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Records an iteration won by the given players.
    ///
    /// Panics if `winners` is empty, has more entries than players, or a
    /// winner is not a valid player index.
    pub fn record(&mut self, winners: &[usize]) {
        let ways = winners.len();
        assert!(0 < ways && ways <= self.players, "0 < winners <= players");

        for &player in winners {
            assert!(player < self.players, "invalid player index {player}");
            self.splits[player * self.players + ways - 1] += 1;
        }

        self.iterations += 1;
    }

    /// Merges another tally into this one.
    ///
    /// Panics if the tallies have different number of players.
    pub fn merge(&mut self, other: &Tally) {
        assert_eq!(self.players, other.players, "tallies players mismatch");

        self.iterations += other.iterations;
        self.splits
            .iter_mut()
            .zip(&other.splits)
            .for_each(|(l, r)| *l += r);
    }

    /// The win credit for a player, each iteration won in a `w`-ways split
    /// counts as `1 / w`.
    pub fn credit(&self, player: usize) -> f64 {
        self.player_splits(player)
            .iter()
            .enumerate()
            .map(|(idx, &count)| count as f64 / (idx + 1) as f64)
            .sum()
    }

    /// The win credit for a player divided by the number of iterations.
    ///
    /// Each split count is divided separately, so that a player that always
    /// wins the same split gets the same rate for any number of iterations.
    pub fn win_rate(&self, player: usize) -> f64 {
        let n = self.iterations as f64;
        self.player_splits(player)
            .iter()
            .enumerate()
            .map(|(idx, &count)| count as f64 / ((idx + 1) as f64 * n))
            .sum()
    }

    /// The number of iterations a player won alone.
    pub fn wins(&self, player: usize) -> u64 {
        self.player_splits(player)[0]
    }

    /// The number of iterations a player split with other players.
    pub fn ties(&self, player: usize) -> u64 {
        self.player_splits(player)[1..].iter().sum()
    }

    fn player_splits(&self, player: usize) -> &[u64] {
        let start = player * self.players;
        &self.splits[start..start + self.players]
    }
}

impl ops::AddAssign<&Tally> for Tally {
    fn add_assign(&mut self, rhs: &Tally) {
        self.merge(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_wins_and_splits() {
        let mut tally = Tally::new(3);
        tally.record(&[0]);
        tally.record(&[0]);
        tally.record(&[1, 2]);
        tally.record(&[0, 1, 2]);

        assert_eq!(tally.iterations(), 4);
        assert_eq!(tally.wins(0), 2);
        assert_eq!(tally.ties(0), 1);
        assert_eq!(tally.wins(1), 0);
        assert_eq!(tally.ties(1), 2);

        assert_eq!(tally.credit(0), 2.0 + 1.0 / 3.0);
        assert_eq!(tally.credit(1), 0.5 + 1.0 / 3.0);
        assert_eq!(tally.credit(1), tally.credit(2));

        let total = (0..3).map(|p| tally.credit(p)).sum::<f64>();
        approx::assert_abs_diff_eq!(total, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn merge_is_order_independent() {
        let mut t1 = Tally::new(2);
        t1.record(&[0]);
        t1.record(&[0, 1]);

        let mut t2 = Tally::new(2);
        t2.record(&[1]);
        t2.record(&[1]);
        t2.record(&[0, 1]);

        let mut l = t1.clone();
        l += &t2;

        let mut r = t2.clone();
        r.merge(&t1);

        assert_eq!(l, r);
        assert_eq!(l.iterations(), 5);
        assert_eq!(l.credit(0), 2.0);
        assert_eq!(l.credit(1), 3.0);
    }

    #[test]
    fn win_rate_independent_of_iterations() {
        let mut one = Tally::new(3);
        one.record(&[0, 1, 2]);

        let mut many = Tally::new(3);
        for _ in 0..999 {
            many.record(&[0, 1, 2]);
        }

        for p in 0..3 {
            assert_eq!(one.win_rate(p), 1.0 / 3.0);
            assert_eq!(one.win_rate(p), many.win_rate(p));
        }
    }

    #[test]
    #[should_panic]
    fn record_no_winners() {
        Tally::new(2).record(&[]);
    }

    #[test]
    #[should_panic]
    fn merge_mismatch() {
        Tally::new(2).merge(&Tally::new(3));
    }
}
