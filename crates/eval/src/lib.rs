// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluator for equity estimation.
//!
//! The crate defines the [HandEvaluator] capability used to score a player
//! hand against a complete board, and a Texas Hold'em implementation that
//! scores the best five cards out of seven:
//!
//! ```
//! # use equity_eval::*;
//! let board = Card::parse_many("2c7d9hJcKs").unwrap();
//! let aces = HoldemEvaluator.evaluate(&Card::parse_many("AhAd").unwrap(), &board).unwrap();
//! let kings = HoldemEvaluator.evaluate(&Card::parse_many("KhKd").unwrap(), &board).unwrap();
//!
//! // Lower scores are stronger hands.
//! assert!(kings < aces);
//! assert_eq!(kings.rank(), HandRank::ThreeOfAKind);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandEvaluator, HandRank, HandScore, HoldemEvaluator};

// Reexport cards types.
pub use equity_cards::{Card, CardPool, Deck, Rank, Suit};
