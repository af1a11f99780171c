// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity estimation for Texas Hold'em.
//!
//! The [Estimator] completes the board many times at random from the cards
//! left in a [CardPool] and credits the best hands, splitting credit evenly
//! among tied players:
//!
//! ```
//! # use equity_sim::*;
//! let players = vec![
//!     Player::with_hand("Alice", Card::parse_many("AsAh").unwrap()),
//!     Player::with_hand("Bob", Card::parse_many("2c7d").unwrap()),
//! ];
//! let pool = CardPool::excluding(&Card::parse_many("AsAh2c7d").unwrap());
//!
//! let config = Config { tasks: 2, seed: Some(101) };
//! let estimator = Estimator::with_config(HoldemEvaluator, config);
//! let res = estimator.estimate(&players, &[], &pool, 10_000).unwrap();
//!
//! assert!(res.get("Alice").unwrap().win_rate > 0.8);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::EquityError;

mod estimator;
pub use estimator::{Config, Estimator};

mod player;
pub use player::Player;

mod result;
pub use result::{EquityResult, PlayerEquity, aggregate};

mod tally;
pub use tally::Tally;

// Reexport cards and evaluator types.
pub use equity_cards::{Card, CardPool, Deck, DeckError};
pub use equity_eval::{EvalError, HandEvaluator, HandRank, HandScore, HoldemEvaluator};
