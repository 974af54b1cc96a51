//! Round engine and state machine.
//!
//! A [`RoundState`] is a plain value. Every transition borrows the current
//! state and returns the next one, so a rejected transition leaves the
//! caller's state untouched and any intermediate state can be kept, logged
//! or persisted.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::{Hand, calc_value};
use crate::result::{Outcome, Settlement};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{DealEvent, Phase, Seat};

/// Cards dealt before the player acts: dealer, player, dealer, player.
pub const OPENING_CARDS: usize = 4;

/// State of a single-seat blackjack round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    phase: Phase,
    deck: Deck,
    dealer: Hand,
    player: Hand,
    chips: u32,
    bet: u32,
    seed: Option<u64>,
    settlement: Option<Settlement>,
}

impl RoundState {
    /// Creates a round waiting for a bet from a player holding `chips`.
    #[must_use]
    pub fn new(chips: u32) -> Self {
        Self {
            phase: Phase::AwaitingBet,
            deck: Deck::new(),
            dealer: Hand::new(),
            player: Hand::new(),
            chips,
            bet: 0,
            seed: None,
            settlement: None,
        }
    }

    /// Performs one automatic step of the `Dealing` or `DealerTurn` phase.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] in any other phase, or
    /// [`ActionError::EmptyDeck`] if a draw finds the deck exhausted.
    pub fn step(&self) -> Result<(Self, DealEvent), ActionError> {
        match self.phase {
            Phase::Dealing => self.deal_step(),
            Phase::DealerTurn => self.dealer_step(),
            Phase::AwaitingBet | Phase::PlayerTurn | Phase::Resolved => {
                Err(ActionError::InvalidState)
            }
        }
    }

    /// Returns a lazy sequence of the automatic steps from this state.
    ///
    /// The sequence ends when the player must act or the round is resolved.
    #[must_use]
    pub fn steps(self) -> Steps {
        Steps {
            state: self,
            failed: false,
        }
    }

    /// Runs every automatic step, returning the state reached and the events
    /// produced on the way.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`RoundState::step`].
    pub fn advance(self) -> Result<(Self, Vec<DealEvent>), ActionError> {
        let mut steps = self.steps();
        let mut events = Vec::new();
        for event in steps.by_ref() {
            events.push(event?);
        }
        Ok((steps.into_state(), events))
    }

    pub(crate) fn draw_into(&mut self, seat: Seat, face_up: bool) -> Result<Card, ActionError> {
        let mut card = self.deck.draw()?;
        card.face_up = face_up;
        match seat {
            Seat::Dealer => self.dealer.add_card(card),
            Seat::Player => self.player.add_card(card),
        }
        tracing::debug!(?seat, card = %card, "card dealt");
        Ok(card)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the bet for this round (0 before a bet is placed).
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Returns the chip balance the round started with.
    #[must_use]
    pub const fn starting_chips(&self) -> u32 {
        self.chips
    }

    /// Returns the current chip balance, including the settlement once the
    /// round is resolved.
    #[must_use]
    pub const fn chips(&self) -> u32 {
        match self.settlement {
            Some(settlement) => settlement.chips_after,
            None => self.chips,
        }
    }

    /// Returns the seed the deck was shuffled with.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the settlement of a resolved round.
    #[must_use]
    pub const fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    /// Returns the outcome of a resolved round.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.settlement.map(|s| s.outcome)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Value of the player's hand.
    #[must_use]
    pub fn player_value(&self) -> u32 {
        self.player.value()
    }

    /// Value of the dealer's hand, optionally counting the hole card while it
    /// is still face down.
    #[must_use]
    pub fn dealer_value(&self, ignore_face_down: bool) -> u32 {
        calc_value(self.dealer.cards(), ignore_face_down)
    }
}

/// Lazy sequence of automatic round events.
///
/// Created by [`RoundState::steps`]. Each call to `next` performs exactly one
/// transition, so a caller may pace dealing however it likes.
#[derive(Debug, Clone)]
pub struct Steps {
    state: RoundState,
    failed: bool,
}

impl Steps {
    /// Returns the state reached so far.
    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    /// Consumes the sequence, returning the state reached so far.
    #[must_use]
    pub fn into_state(self) -> RoundState {
        self.state
    }
}

impl Iterator for Steps {
    type Item = Result<DealEvent, ActionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.state.phase.is_automatic() {
            return None;
        }

        match self.state.step() {
            Ok((next, event)) => {
                self.state = next;
                Some(Ok(event))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
