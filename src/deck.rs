//! The card supply for a single round.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// A single 52-card deck.
///
/// Cards are drawn from the end of the sequence. A fresh deck is in
/// canonical order (suit-major, ranks 1..=13) with every card face up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck with one card of each rank and suit.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a stacked deck whose draws yield `cards` in the given order.
    ///
    /// ```
    /// use bjcore::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::from_draw_order([Card::new(Suit::Spades, 10), Card::new(Suit::Hearts, 7)]);
    /// assert_eq!(deck.draw().unwrap().rank, 10);
    /// assert_eq!(deck.draw().unwrap().rank, 7);
    /// assert!(deck.draw().is_err());
    /// ```
    #[must_use]
    pub fn from_draw_order(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the deck, drawing a fresh seed from `entropy` when `seed` is
    /// `None`.
    ///
    /// Returns the seed that was used so it can be persisted and replayed.
    pub fn shuffle<R: RngCore + ?Sized>(&mut self, seed: Option<u64>, entropy: &mut R) -> u64 {
        let seed = seed.unwrap_or_else(|| entropy.next_u64());
        self.shuffle_seeded(seed);
        seed
    }

    /// Applies the permutation determined by `seed` to the current order.
    ///
    /// The same seed applied to the same starting order always yields the
    /// same result.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards still in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
