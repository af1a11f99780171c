// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation.
//!
//! The [HandEvaluator] trait is the capability used by an equity estimator to
//! score players hands, it takes a player two hole cards and a complete five
//! cards board and returns a score where lower is stronger and equal scores
//! are exact ties.
//!
//! [HoldemEvaluator] implements the trait with the standard Texas Hold'em
//! ranking using the best five cards out of the seven.
use std::fmt;
use thiserror::Error;

use equity_cards::Card;

mod score;
pub use score::{HandRank, HandScore};

/// Number of hole cards required by an evaluation.
pub const HOLE_CARDS: usize = 2;

/// Number of board cards required by an evaluation.
pub const BOARD_CARDS: usize = 5;

/// Errors returned by a [HandEvaluator].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The hand doesn't have exactly two hole cards.
    #[error("expected 2 hole cards, got {0}")]
    InvalidHoleCards(usize),
    /// The board doesn't have exactly five cards.
    #[error("expected 5 board cards, got {0}")]
    InvalidBoard(usize),
}

/// A hand evaluator.
pub trait HandEvaluator: Sync {
    /// The hand score, lower scores are stronger hands.
    type Score: Ord + Copy + Send + fmt::Debug;

    /// Scores a player two hole cards with a complete five cards board.
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> Result<Self::Score, EvalError>;
}

impl<E: HandEvaluator + ?Sized> HandEvaluator for &E {
    type Score = E::Score;

    fn evaluate(&self, hole: &[Card], board: &[Card]) -> Result<Self::Score, EvalError> {
        (**self).evaluate(hole, board)
    }
}

/// Texas Hold'em hand evaluator.
#[derive(Debug, Default, Clone, Copy)]
pub struct HoldemEvaluator;

impl HandEvaluator for HoldemEvaluator {
    type Score = HandScore;

    fn evaluate(&self, hole: &[Card], board: &[Card]) -> Result<HandScore, EvalError> {
        if hole.len() != HOLE_CARDS {
            return Err(EvalError::InvalidHoleCards(hole.len()));
        }

        if board.len() != BOARD_CARDS {
            return Err(EvalError::InvalidBoard(board.len()));
        }

        let mut cards = [hole[0]; HOLE_CARDS + BOARD_CARDS];
        cards[..HOLE_CARDS].copy_from_slice(hole);
        cards[HOLE_CARDS..].copy_from_slice(board);

        Ok(HandScore::eval(&cards))
    }
}
