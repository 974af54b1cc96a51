//! High-score aggregation over the game history.

use crate::error::StoreError;
use crate::record::{GameRecord, HighScores};
use crate::result::Outcome;
use crate::store::GameStore;

/// Longest run of consecutive wins, scanning `records` in chronological
/// order.
///
/// Losses, draws and unfinished rounds all end a run.
///
/// ```
/// use bjcore::{GameRecord, Outcome, longest_win_streak};
///
/// let history: Vec<GameRecord> = [Outcome::Win, Outcome::Win, Outcome::Lose, Outcome::Win]
///     .into_iter()
///     .map(|o| GameRecord { result: Some(o), ..GameRecord::in_progress(100, 10, "") })
///     .collect();
/// assert_eq!(longest_win_streak(&history), 2);
/// ```
#[must_use]
pub fn longest_win_streak<'a>(records: impl IntoIterator<Item = &'a GameRecord>) -> u32 {
    let (best, _) = records
        .into_iter()
        .fold((0, 0), |(best, run), record| match record.result {
            Some(Outcome::Win) => {
                let run = run + 1;
                (best.max(run), run)
            }
            _ => (best, 0),
        });
    best
}

impl HighScores {
    /// Computes the bests over a chronological history.
    #[must_use]
    pub fn from_history(records: &[GameRecord]) -> Self {
        Self {
            chips_value: records.iter().map(|r| r.chips_value).max().unwrap_or(0),
            bet_value: records.iter().map(|r| r.bet_value).max().unwrap_or(0),
            streak: longest_win_streak(records),
        }
    }
}

/// Recomputes the bests from every stored game and raises the stored values
/// that were beaten.
///
/// A missing high-score row is created first. Returns the stored bests after
/// the update.
///
/// # Errors
///
/// Propagates any store failure.
pub fn update_high_scores<S: GameStore + ?Sized>(store: &S) -> Result<HighScores, StoreError> {
    let history = store.all_games()?;
    let computed = HighScores::from_history(&history);

    let mut stored = if let Some(scores) = store.high_scores()? {
        scores
    } else {
        store.insert_high_scores(HighScores::default())?;
        store.high_scores()?.unwrap_or_default()
    };

    if computed.chips_value > stored.chips_value {
        store.update_best_chips(computed.chips_value)?;
        stored.chips_value = computed.chips_value;
        tracing::info!(chips = computed.chips_value, "new best chips");
    }
    if computed.bet_value > stored.bet_value {
        store.update_best_bet(computed.bet_value)?;
        stored.bet_value = computed.bet_value;
        tracing::info!(bet = computed.bet_value, "new best bet");
    }
    if computed.streak > stored.streak {
        store.update_best_streak(computed.streak)?;
        stored.streak = computed.streak;
        tracing::info!(streak = computed.streak, "new best streak");
    }

    Ok(stored)
}
