//! A single-seat blackjack round engine with optional `no_std` support.
//!
//! [`RoundState`] is the round state machine: place a bet, step through the
//! opening deal, hit or hold, then step through the dealer's turn to a
//! [`Settlement`]. Decks are shuffled from a 64-bit seed, so an interrupted
//! round can be dealt again card for card. [`Table`] adds the chip balance,
//! persistence through a [`GameStore`] and high-score tracking.
//!
//! # Example
//!
//! ```
//! use bjcore::{Phase, RoundState};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut entropy = ChaCha8Rng::seed_from_u64(1);
//! let round = RoundState::new(100).place_bet(25, Some(42), &mut entropy).unwrap();
//! let (round, events) = round.advance().unwrap();
//! assert!(events.len() >= 4);
//! assert!(matches!(round.phase(), Phase::PlayerTurn | Phase::Resolved));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod clock;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod record;
pub mod result;
pub mod round;
pub mod scores;
pub mod store;
pub mod table;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::Clock;
pub use deck::Deck;
pub use error::{ActionError, BetError, DeckError, StoreError, TableError};
pub use hand::{Hand, calc_value, evaluate_cards};
pub use options::TableOptions;
pub use record::{GameRecord, HighScores};
pub use result::{Outcome, Settlement};
pub use round::{DealEvent, OPENING_CARDS, Phase, RoundState, Seat, Steps};
pub use scores::{longest_win_streak, update_high_scores};
pub use store::{GameStore, MemoryStore};
pub use table::Table;
