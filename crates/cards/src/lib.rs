// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards types for equity estimation.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use equity_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd.rank(), Rank::King);
//! ```
//!
//! a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use equity_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hole_cards = deck.deal(2).unwrap();
//! assert_eq!(deck.count(), 50);
//! ```
//!
//! and a [CardPool] immutable snapshot that samples cards without removing
//! them, used to complete a board many times from the same remaining cards:
//!
//! ```
//! # use equity_cards::{Card, CardPool};
//! let used = Card::parse_many("AsAh 2c7d").unwrap();
//! let pool = CardPool::excluding(&used);
//!
//! let mut board = Vec::new();
//! pool.sample(&mut rand::rng(), 5, &mut board).unwrap();
//! assert_eq!(board.len(), 5);
//! assert_eq!(pool.len(), 48);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Rank, Suit};

mod deck;
pub use deck::Deck;

mod error;
pub use error::DeckError;

mod pool;
pub use pool::CardPool;
