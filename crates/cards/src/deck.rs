// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use rand::prelude::*;

use crate::{Card, CardPool, DeckError, Rank, Suit};

/// A cards Deck
///
/// The deck holds the cards that have not been dealt yet, dealing removes
/// cards from the top of the deck until the deck is [reset](Deck::reset).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `n` cards from the top of the deck.
    ///
    /// If the deck has less than `n` cards returns an error and leaves the
    /// deck unchanged.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                available: self.cards.len(),
            });
        }

        // The top of the deck is the end of the vector.
        let mut cards = self.cards.split_off(self.cards.len() - n);
        cards.reverse();
        Ok(cards)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is still in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The cards left in the deck.
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck, returns false if the card was not in
    /// the deck.
    pub fn remove(&mut self, card: Card) -> bool {
        let count = self.cards.len();
        self.cards.retain(|c| c != &card);
        count != self.cards.len()
    }

    /// Puts all the cards back in the deck, the cards are not shuffled.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns an immutable snapshot of the cards left in the deck.
    pub fn snapshot(&self) -> CardPool {
        CardPool::from_deck(self)
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_default() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deal_all_cards() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let mut dealt = HashSet::default();

        while !deck.is_empty() {
            let cards = deck.deal(2).unwrap();
            assert_eq!(cards.len(), 2);
            for card in cards {
                assert!(!deck.contains(card));
                assert!(dealt.insert(card));
            }
        }

        assert_eq!(dealt.len(), Deck::SIZE);
    }

    #[test]
    fn deal_from_top() {
        let mut deck = Deck::default();
        let top = *deck.remaining().last().unwrap();
        let next = deck.remaining()[Deck::SIZE - 2];

        assert_eq!(deck.deal(2).unwrap(), vec![top, next]);
        assert_eq!(deck.count(), Deck::SIZE - 2);
    }

    #[test]
    fn deal_is_atomic() {
        let mut deck = Deck::default();
        deck.deal(50).unwrap();

        let before = deck.remaining().to_vec();
        let err = deck.deal(3).unwrap_err();
        assert_eq!(
            err,
            DeckError::InsufficientCards {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(deck.remaining(), before.as_slice());

        assert!(deck.deal(0).unwrap().is_empty());
        assert_eq!(deck.deal(2).unwrap().len(), 2);
        assert!(deck.is_empty());
    }

    #[test]
    fn remove_and_reset() {
        let mut deck = Deck::default();
        let ad = Card::new(Rank::Ace, Suit::Diamonds);

        assert!(deck.remove(ad));
        assert!(!deck.remove(ad));
        assert!(!deck.contains(ad));
        assert_eq!(deck.count(), Deck::SIZE - 1);

        deck.deal(10).unwrap();
        deck.reset();
        assert_eq!(deck.count(), Deck::SIZE);
        assert!(deck.contains(ad));
    }

    #[test]
    fn seeded_shuffle() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(d1.remaining(), d2.remaining());
        assert_ne!(d1.remaining(), Deck::default().remaining());
    }

    #[test]
    fn snapshot_excludes_dealt_cards() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1));
        let dealt = deck.deal(4).unwrap();

        let pool = deck.snapshot();
        assert_eq!(pool.len(), Deck::SIZE - 4);
        assert!(dealt.iter().all(|c| !pool.contains(*c)));

        // The snapshot is not affected by later deals.
        deck.deal(3).unwrap();
        assert_eq!(pool.len(), Deck::SIZE - 4);
    }
}
