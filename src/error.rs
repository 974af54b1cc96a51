//! Error types for deck, round, persistence and table operations.

use alloc::string::String;

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The round is not waiting for a bet.
    #[error("invalid round state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the available chips.
    #[error("insufficient chips")]
    InsufficientFunds,
}

/// Errors that can occur while dealing or playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The transition is not allowed in the current phase.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out of cards.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::EmptyDeck,
        }
    }
}

/// Errors reported by a [`GameStore`](crate::store::GameStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No game record exists with the given id.
    #[error("game {0} not found")]
    GameNotFound(u64),
    /// The high-score row has not been created yet.
    #[error("high scores have not been recorded")]
    NoHighScores,
    /// The storage backend failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by a [`Table`](crate::table::Table).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// A round transition failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The persistence layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The round has not reached its resolution yet.
    #[error("round is not resolved")]
    RoundNotResolved,
    /// No game is in progress at this table.
    #[error("no active game")]
    NoActiveGame,
}
