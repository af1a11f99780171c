// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card, rank and suit definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::DeckError;

/// A Poker card.
///
/// A card is an opaque identifier in the 52 cards universe, it is encoded as
/// `suit * 13 + rank` so that it can be used as an index in per card tables.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * 13 + rank as u8)
    }

    /// Creates a card from its index, returns `None` if `idx >= 52`.
    pub const fn from_index(idx: u8) -> Option<Card> {
        if idx < 52 { Some(Self(idx)) } else { None }
    }

    /// This card index in the range `0..52`.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_index(self.rank_bits())
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::from_index(self.suit_bits())
    }

    /// Returns the rank as a number, deuce=0,trey=1,...,ace=12.
    #[inline]
    pub const fn rank_bits(&self) -> u8 {
        self.0 % 13
    }

    /// Returns the suit as a number in `0..4`.
    #[inline]
    pub const fn suit_bits(&self) -> u8 {
        self.0 / 13
    }

    /// Parses a list of cards, the cards can be concatenated or separated by
    /// spaces or commas, for example `"AsKd"`, `"As Kd"`, `"As,Kd"`.
    pub fn parse_many(s: &str) -> Result<Vec<Card>, DeckError> {
        let chars = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect::<Vec<_>>();

        let mut cards = Vec::with_capacity(chars.len() / 2);
        let mut pos = 0;
        while pos < chars.len() {
            // A ten can be written as "10" so a card may take three chars.
            let len = if chars[pos] == '1' { 3 } else { 2 };
            if pos + len > chars.len() {
                return Err(DeckError::ParseCard(chars[pos..].iter().collect()));
            }

            let token = chars[pos..pos + len].iter().collect::<String>();
            cards.push(token.parse()?);
            pos += len;
        }

        Ok(cards)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DeckError::ParseCard(s.to_string());

        let s = s.trim();
        let (rank, suit) = match s.strip_prefix("10") {
            Some(suit) => (Rank::Ten, suit),
            None => {
                let mut chars = s.chars();
                let rank = chars.next().and_then(Rank::from_char).ok_or_else(err)?;
                (rank, chars.as_str())
            }
        };

        let mut chars = suit.chars();
        let suit = chars.next().and_then(Suit::from_char).ok_or_else(err)?;
        if chars.next().is_some() {
            return Err(err());
        }

        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = DeckError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    fn from_index(idx: u8) -> Rank {
        use Rank::*;
        match idx {
            0 => Deuce,
            1 => Trey,
            2 => Four,
            3 => Five,
            4 => Six,
            5 => Seven,
            6 => Eight,
            7 => Nine,
            8 => Ten,
            9 => Jack,
            10 => Queen,
            11 => King,
            _ => Ace,
        }
    }

    fn from_char(c: char) -> Option<Rank> {
        use Rank::*;
        let rank = match c.to_ascii_uppercase() {
            '2' => Deuce,
            '3' => Trey,
            '4' => Four,
            '5' => Five,
            '6' => Six,
            '7' => Seven,
            '8' => Eight,
            '9' => Nine,
            'T' => Ten,
            'J' => Jack,
            'Q' => Queen,
            'K' => King,
            'A' => Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    fn from_index(idx: u8) -> Suit {
        match idx {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            'c' | 'C' | '♣' | '♧' => Some(Suit::Clubs),
            'd' | 'D' | '♦' | '♢' => Some(Suit::Diamonds),
            'h' | 'H' | '♥' | '♡' => Some(Suit::Hearts),
            's' | 'S' | '♠' | '♤' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut ids = HashSet::default();
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);
                assert_eq!(card.rank_bits(), rank as u8);
                assert_eq!(Card::from_index(card.index() as u8), Some(card));
                ids.insert(card.index());
            }
        }

        // Check uniqueness and range.
        assert_eq!(ids.len(), 52);
        assert!(ids.iter().all(|&idx| idx < 52));
        assert_eq!(Card::from_index(52), None);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");
    }

    #[test]
    fn card_from_str() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!("Ah".parse::<Card>().unwrap(), ah);
        assert_eq!("AH".parse::<Card>().unwrap(), ah);
        assert_eq!("a♥".parse::<Card>().unwrap(), ah);

        let ts = Card::new(Rank::Ten, Suit::Spades);
        assert_eq!("Ts".parse::<Card>().unwrap(), ts);
        assert_eq!("10s".parse::<Card>().unwrap(), ts);

        for s in ["", "A", "Ax", "1s", "Ahh", "Zc"] {
            assert!(
                matches!(s.parse::<Card>(), Err(DeckError::ParseCard(_))),
                "{s:?} should not parse"
            );
        }
    }

    #[test]
    fn parse_many_cards() {
        let expected = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Ten, Suit::Clubs),
        ];

        assert_eq!(Card::parse_many("AsKdTc").unwrap(), expected);
        assert_eq!(Card::parse_many("As Kd 10c").unwrap(), expected);
        assert_eq!(Card::parse_many("As, Kd, Tc").unwrap(), expected);
        assert!(Card::parse_many("").unwrap().is_empty());
        assert!(Card::parse_many("AsK").is_err());
    }

    #[test]
    fn card_serde() {
        let card = Card::new(Rank::Queen, Suit::Clubs);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Qc\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
        assert!(serde_json::from_str::<Card>("\"Qx\"").is_err());
    }
}
