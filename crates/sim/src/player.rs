// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player types.
use serde::{Deserialize, Serialize};

use equity_cards::Card;

/// A player with a name and private hole cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    /// Creates a new player with no cards.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::with_capacity(2),
        }
    }

    /// Creates a new player holding the given cards.
    pub fn with_hand(name: impl Into<String>, hand: impl IntoIterator<Item = Card>) -> Self {
        let mut player = Self::new(name);
        player.receive_cards(hand);
        player
    }

    /// This player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This player hole cards.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Adds cards to the player hand.
    pub fn receive_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Clears the player hand for a new game.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }
}
