//! Round phase and event types.

use crate::card::Card;
use crate::result::Settlement;

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No bet has been placed yet.
    AwaitingBet,
    /// The four opening cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or hold.
    PlayerTurn,
    /// Dealer reveals the hole card and draws.
    DealerTurn,
    /// The round is over and settled.
    Resolved,
}

impl Phase {
    /// Returns whether the engine can advance this phase without player input.
    #[must_use]
    pub const fn is_automatic(self) -> bool {
        matches!(self, Self::Dealing | Self::DealerTurn)
    }
}

/// Which side of the table a card goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The dealer.
    Dealer,
    /// The player.
    Player,
}

/// One visible change produced while a round advances.
///
/// A presentation layer can animate these one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealEvent {
    /// A card was drawn and placed in a hand.
    Dealt {
        /// Receiving side.
        seat: Seat,
        /// The card as placed (face-down for the dealer's hole card).
        card: Card,
    },
    /// The dealer's hole card was turned face up.
    Revealed(Card),
    /// The round was settled.
    Resolved(Settlement),
}
