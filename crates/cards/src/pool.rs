// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Immutable sampling pool.
use rand::prelude::*;

use crate::{Card, Deck, DeckError};

/// An immutable set of cards used for sampling.
///
/// Sampling never removes cards from the pool, so the same pool can be shared
/// by many independent draws, for example across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPool {
    cards: Vec<Card>,
    mask: u64,
}

impl CardPool {
    /// Creates a pool from a list of cards, fails if a card is repeated.
    pub fn new<I>(cards: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut pool = Self {
            cards: Vec::with_capacity(Deck::SIZE),
            mask: 0,
        };

        for card in cards {
            let bit = 1u64 << card.index();
            if pool.mask & bit != 0 {
                return Err(DeckError::DuplicateCard(card));
            }

            pool.mask |= bit;
            pool.cards.push(card);
        }

        Ok(pool)
    }

    /// Creates a pool with all the cards in the deck but the `used` ones.
    pub fn excluding(used: &[Card]) -> Self {
        let used = used.iter().fold(0u64, |m, c| m | (1 << c.index()));
        let cards = Deck::default()
            .into_iter()
            .filter(|c| used & (1 << c.index()) == 0)
            .collect::<Vec<_>>();
        let mask = cards.iter().fold(0u64, |m, c| m | (1 << c.index()));
        Self { cards, mask }
    }

    pub(crate) fn from_deck(deck: &Deck) -> Self {
        let cards = deck.remaining().to_vec();
        let mask = cards.iter().fold(0u64, |m, c| m | (1 << c.index()));
        Self { cards, mask }
    }

    /// Number of cards in the pool.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks if a card is in the pool.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.mask & (1 << card.index()) != 0
    }

    /// The pool cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Appends `k` distinct cards sampled uniformly from the pool to `out`.
    ///
    /// Returns an error and leaves `out` unchanged if the pool has less than
    /// `k` cards.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        k: usize,
        out: &mut Vec<Card>,
    ) -> Result<(), DeckError> {
        if k > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: k,
                available: self.cards.len(),
            });
        }

        out.extend(self.cards.choose_multiple(rng, k).copied());
        Ok(())
    }
}
