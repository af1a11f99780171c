// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity estimation errors.
use thiserror::Error;

use equity_cards::{Card, DeckError};
use equity_eval::EvalError;

/// Errors returned by an equity estimation.
///
/// An error aborts the whole estimation, no iteration is credited.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EquityError {
    /// The remaining cards are not enough to complete the board.
    #[error("requested {requested} cards but only {available} are available")]
    InsufficientCards {
        /// Number of cards needed to complete the board.
        requested: usize,
        /// Number of cards in the pool.
        available: usize,
    },
    /// The board has more than five cards.
    #[error("the board has {0} cards, at most 5 are allowed")]
    InvalidBoardSize(usize),
    /// The number of iterations is zero.
    #[error("the number of iterations must be positive")]
    InvalidIterationCount,
    /// There are no players to estimate.
    #[error("no players")]
    NoPlayers,
    /// A card is in more than one hand, in the board, or in the pool.
    #[error("card {0} is used more than once")]
    DuplicateCard(Card),
    /// The hand evaluator failed.
    #[error(transparent)]
    Evaluator(#[from] EvalError),
    /// Other deck errors.
    #[error(transparent)]
    Deck(DeckError),
}

impl From<DeckError> for EquityError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::InsufficientCards {
                requested,
                available,
            } => EquityError::InsufficientCards {
                requested,
                available,
            },
            DeckError::DuplicateCard(card) => EquityError::DuplicateCard(card),
            err => EquityError::Deck(err),
        }
    }
}
