// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand scores.
use std::fmt;

use equity_cards::Card;

/// Ranks bitmask for the five high straight (A2345).
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Position of the hand category in a score.
const CATEGORY_SHIFT: u32 = 20;

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    fn from_category(category: u32) -> HandRank {
        use HandRank::*;
        match category {
            0 => StraightFlush,
            1 => FourOfAKind,
            2 => FullHouse,
            3 => Flush,
            4 => Straight,
            5 => ThreeOfAKind,
            6 => TwoPair,
            7 => OnePair,
            _ => HighCard,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        f.write_str(s)
    }
}

/// The strength of a 5, 6, or 7 cards hand.
///
/// Scores are ordered so that a **lower** score is a stronger hand and two
/// hands tie if and only if their scores are equal. A score packs the hand
/// category in the high bits followed by up to five ranks (the rank of the
/// made hand first, then the kickers), each rank stored as `12 - rank` so
/// that higher cards give lower values:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxxxxxx|xxxxcccc|11112222|33334444|...
///   +--------+--------+--------+--------+
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandScore(u32);

impl HandScore {
    /// Evaluates the best five cards hand out of 5, 6, or 7 cards.
    ///
    /// Panics if the number of cards is not 5 <= n <= 7.
    pub fn eval(cards: &[Card]) -> HandScore {
        let n = cards.len();
        assert!((5..=7).contains(&n), "5 <= cards.len() <= 7");

        let mut best = HandScore(u32::MAX);
        let mut h = [cards[0]; 5];

        for c1 in 0..n {
            h[0] = cards[c1];
            for c2 in (c1 + 1)..n {
                h[1] = cards[c2];
                for c3 in (c2 + 1)..n {
                    h[2] = cards[c3];
                    for c4 in (c3 + 1)..n {
                        h[3] = cards[c4];
                        for c5 in (c4 + 1)..n {
                            h[4] = cards[c5];
                            best = best.min(score_five(&h));
                        }
                    }
                }
            }
        }

        best
    }

    /// The hand category for this score.
    pub fn rank(&self) -> HandRank {
        HandRank::from_category(self.0 >> CATEGORY_SHIFT)
    }

    /// The raw score value.
    pub fn value(&self) -> u32 {
        self.0
    }

    fn new(rank: HandRank, ranks: &[u8]) -> HandScore {
        let category = HandRank::StraightFlush as u32 - rank as u32;
        let value = ranks
            .iter()
            .enumerate()
            .fold(category << CATEGORY_SHIFT, |v, (idx, &r)| {
                v | ((12 - r as u32) << (16 - 4 * idx as u32))
            });
        HandScore(value)
    }
}

impl fmt::Debug for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandScore({}, 0x{:06x})", self.rank(), self.0)
    }
}

/// Returns the high card rank if the five ranks in the mask are a straight.
fn straight_high(mask: u16) -> Option<u8> {
    if mask.count_ones() != 5 {
        return None;
    }

    if mask == WHEEL {
        // Five high straight.
        return Some(3);
    }

    let low = mask.trailing_zeros();
    (mask >> low == 0b1_1111).then_some(low as u8 + 4)
}

/// Scores a five cards hand.
fn score_five(cards: &[Card; 5]) -> HandScore {
    let mut counts = [0u8; 13];
    let mut mask = 0u16;
    for c in cards {
        counts[c.rank_bits() as usize] += 1;
        mask |= 1 << c.rank_bits();
    }

    let suit = cards[0].suit_bits();
    let is_flush = cards.iter().all(|c| c.suit_bits() == suit);
    let straight = straight_high(mask);

    // Group ranks by count, the highest count first and within the same count
    // the highest rank first.
    let mut groups = [(0u8, 0u8); 5];
    let mut len = 0;
    for r in (0..13u8).rev() {
        if counts[r as usize] > 0 {
            groups[len] = (counts[r as usize], r);
            len += 1;
        }
    }

    let groups = &mut groups[..len];
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let mut ranks = [0u8; 5];
    groups
        .iter()
        .zip(ranks.iter_mut())
        .for_each(|(g, r)| *r = g.1);
    let ranks = &ranks[..len];

    // Flushes and straights have five distinct ranks so they can't pair.
    match (is_flush, straight) {
        (true, Some(high)) => return HandScore::new(HandRank::StraightFlush, &[high]),
        (true, None) => return HandScore::new(HandRank::Flush, ranks),
        (false, Some(high)) => return HandScore::new(HandRank::Straight, &[high]),
        (false, None) => {}
    }

    match (groups[0].0, groups.get(1).map(|g| g.0).unwrap_or(0)) {
        (4, _) => HandScore::new(HandRank::FourOfAKind, ranks),
        (3, 2) => HandScore::new(HandRank::FullHouse, ranks),
        (3, _) => HandScore::new(HandRank::ThreeOfAKind, ranks),
        (2, 2) => HandScore::new(HandRank::TwoPair, ranks),
        (2, _) => HandScore::new(HandRank::OnePair, ranks),
        _ => HandScore::new(HandRank::HighCard, ranks),
    }
}
