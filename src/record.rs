//! Persisted records.

use alloc::string::String;

use crate::result::Outcome;

/// One persisted round.
///
/// A record is written when the bet is placed and updated once the round
/// resolves; `result` stays `None` while the round is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameRecord {
    /// Store-assigned id (0 until inserted).
    pub uid: u64,
    /// Chips held: before the round while in progress, after it once resolved.
    pub chips_value: u32,
    /// The bet for the round.
    pub bet_value: u32,
    /// Timestamp of the last write.
    pub date: String,
    /// Round outcome, `None` while in progress.
    pub result: Option<Outcome>,
    /// Seed the deck was shuffled with.
    pub deck_seed: Option<u64>,
}

impl GameRecord {
    /// Creates a not-yet-inserted record for a round that has just started.
    #[must_use]
    pub fn in_progress(chips_value: u32, bet_value: u32, date: impl Into<String>) -> Self {
        Self {
            uid: 0,
            chips_value,
            bet_value,
            date: date.into(),
            result: None,
            deck_seed: None,
        }
    }

    /// Returns whether the round has an outcome.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.result.is_some()
    }
}

/// Best values ever reached at the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HighScores {
    /// Highest chip balance recorded.
    pub chips_value: u32,
    /// Largest bet placed.
    pub bet_value: u32,
    /// Longest run of consecutive wins.
    pub streak: u32,
}
