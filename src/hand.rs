//! Hand representation and scoring.

use alloc::vec::Vec;

use crate::card::Card;

/// Evaluates a sequence of cards, returning the total and whether an Ace is
/// being counted as 11.
///
/// Face-down cards are skipped unless `ignore_face_down` is set. Non-aces are
/// summed first; then the Aces are placed one at a time, each adding 11 if
/// the running total stays within 21, otherwise 1. `[K, A, A]` is 22.
#[must_use]
pub fn evaluate_cards(cards: &[Card], ignore_face_down: bool) -> (u32, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if !ignore_face_down && !card.face_up {
            continue;
        }

        if card.is_ace() {
            aces += 1;
        } else {
            value += card.points();
        }
    }

    let mut soft = false;
    for _ in 0..aces {
        if value + 11 <= 21 {
            value += 11;
            soft = true;
        } else {
            value += 1;
        }
    }

    (value, soft)
}

/// Returns the blackjack value of `cards`.
///
/// ```
/// use bjcore::{Card, Suit, calc_value};
///
/// let hand = [Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 13)];
/// assert_eq!(calc_value(&hand, false), 21);
/// ```
#[must_use]
pub fn calc_value(cards: &[Card], ignore_face_down: bool) -> u32 {
    evaluate_cards(cards, ignore_face_down).0
}

/// An ordered hand of cards held by the dealer or the player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Value of the visible cards.
    #[must_use]
    pub fn value(&self) -> u32 {
        calc_value(&self.cards, false)
    }

    /// Value of every card, including any face-down card.
    #[must_use]
    pub fn full_value(&self) -> u32 {
        calc_value(&self.cards, true)
    }

    /// Returns whether the visible total counts an Ace as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards, false).1
    }

    /// Returns whether the visible total is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether this is a two-card 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.full_value() == 21
    }

    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(|c| !c.face_up)
    }

    /// Turns the first card face up.
    ///
    /// Returns the revealed card, or `None` if it was already showing.
    pub fn reveal_hole(&mut self) -> Option<Card> {
        let first = self.cards.first_mut()?;
        if first.face_up {
            return None;
        }
        first.face_up = true;
        Some(*first)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
