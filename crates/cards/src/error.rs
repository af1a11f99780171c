// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck errors.
use thiserror::Error;

use crate::Card;

/// Errors returned when dealing, sampling or parsing cards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// Not enough cards left to satisfy a deal or a sample.
    #[error("requested {requested} cards but only {available} are available")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards available.
        available: usize,
    },
    /// A card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A card string could not be parsed.
    #[error("invalid card {0:?}")]
    ParseCard(String),
}
