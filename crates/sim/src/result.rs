// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity results.
use serde::{Deserialize, Serialize};

use crate::{EquityError, Player, Tally};

/// A player equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEquity {
    /// The player name.
    pub name: String,
    /// The fraction of the pots won, split pots count as a fraction.
    pub win_rate: f64,
    /// The fraction of iterations the player split the pot.
    pub tie_rate: f64,
}

/// The result of an equity estimation.
///
/// Players equities are in the same order as the players passed to the
/// estimator, the win rates are exact fractions that sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    iterations: u64,
    players: Vec<PlayerEquity>,
}

impl EquityResult {
    /// The number of iterations used for the estimation.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// The players equities in roster order.
    pub fn players(&self) -> &[PlayerEquity] {
        &self.players
    }

    /// Gets the equity for the first player with the given name.
    pub fn get(&self, name: &str) -> Option<&PlayerEquity> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Returns the players equities sorted by decreasing win rate, players
    /// with the same win rate keep their roster order.
    pub fn ranked(&self) -> Vec<&PlayerEquity> {
        let mut ranked = self.players.iter().collect::<Vec<_>>();
        ranked.sort_by(|l, r| r.win_rate.total_cmp(&l.win_rate));
        ranked
    }
}

impl<'a> IntoIterator for &'a EquityResult {
    type Item = &'a PlayerEquity;
    type IntoIter = std::slice::Iter<'a, PlayerEquity>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

/// Converts the players win credit into win rates.
///
/// Fails if the tally has no iterations.
///
/// Panics if the tally was not created for this number of players.
pub fn aggregate(players: &[Player], tally: &Tally) -> Result<EquityResult, EquityError> {
    assert_eq!(players.len(), tally.players(), "tally players mismatch");

    let iterations = tally.iterations();
    if iterations == 0 {
        return Err(EquityError::InvalidIterationCount);
    }

    let n = iterations as f64;
    let players = players
        .iter()
        .enumerate()
        .map(|(idx, player)| PlayerEquity {
            name: player.name().to_string(),
            win_rate: tally.win_rate(idx),
            tie_rate: tally.ties(idx) as f64 / n,
        })
        .collect();

    Ok(EquityResult {
        iterations,
        players,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(names: &[&str]) -> Vec<Player> {
        names.iter().map(|name| Player::new(*name)).collect()
    }

    #[test]
    fn aggregate_rates() {
        let players = players(&["Alice", "Bob", "Carol"]);
        let mut tally = Tally::new(3);
        tally.record(&[1]);
        tally.record(&[1]);
        tally.record(&[0, 1]);
        tally.record(&[2]);

        let res = aggregate(&players, &tally).unwrap();
        assert_eq!(res.iterations(), 4);

        let names = res.players().iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);

        assert_eq!(res.players()[0].win_rate, 0.125);
        assert_eq!(res.players()[1].win_rate, 0.625);
        assert_eq!(res.players()[2].win_rate, 0.25);
        assert_eq!(res.get("Alice").unwrap().tie_rate, 0.25);
        assert_eq!(res.get("Carol").unwrap().tie_rate, 0.0);
        assert!(res.get("Dave").is_none());

        let total = res.into_iter().map(|p| p.win_rate).sum::<f64>();
        approx::assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ranked_output() {
        let players = players(&["Alice", "Bob", "Carol", "Dave"]);
        let mut tally = Tally::new(4);
        tally.record(&[2]);
        tally.record(&[2]);
        tally.record(&[1]);
        tally.record(&[3]);

        let res = aggregate(&players, &tally).unwrap();
        let ranked = res
            .ranked()
            .into_iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ranked, ["Carol", "Bob", "Dave", "Alice"]);

        // Roster order is unchanged.
        assert_eq!(res.players()[0].name, "Alice");
    }

    #[test]
    fn aggregate_no_iterations() {
        let players = players(&["Alice", "Bob"]);
        let err = aggregate(&players, &Tally::new(2)).unwrap_err();
        assert_eq!(err, EquityError::InvalidIterationCount);
    }

    #[test]
    fn result_serde() {
        let players = players(&["Alice", "Bob"]);
        let mut tally = Tally::new(2);
        tally.record(&[0, 1]);

        let res = aggregate(&players, &tally).unwrap();
        let json = serde_json::to_string(&res).unwrap();
        assert_eq!(
            json,
            r#"{"iterations":1,"players":[{"name":"Alice","win_rate":0.5,"tie_rate":1.0},{"name":"Bob","win_rate":0.5,"tie_rate":1.0}]}"#
        );
    }
}
