//! Persistence of game records and high scores.
//!
//! The engine only needs the narrow [`GameStore`] interface; [`MemoryStore`]
//! keeps everything in process and is what the tests and demo use.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::error::StoreError;
use crate::record::{GameRecord, HighScores};
use crate::result::Outcome;
use crate::sync::Shared;

/// Storage for game records and the high-score row.
///
/// Methods take `&self`; implementations serialize concurrent callers
/// themselves. Retrying failed writes is the implementation's concern.
pub trait GameStore {
    /// Inserts a new record and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_game(&self, record: GameRecord) -> Result<u64, StoreError>;

    /// Returns the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn game_by_id(&self, uid: u64) -> Result<Option<GameRecord>, StoreError>;

    /// Returns the most recently inserted record without an outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn last_unresolved_game(&self) -> Result<Option<GameRecord>, StoreError>;

    /// Replaces the record with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GameNotFound`] if no such record exists.
    fn update_game(&self, record: GameRecord) -> Result<(), StoreError>;

    /// Sets the deck seed of a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GameNotFound`] if no such record exists.
    fn update_game_seed(&self, uid: u64, seed: u64) -> Result<(), StoreError>;

    /// Sets the outcome of a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GameNotFound`] if no such record exists.
    fn update_game_result(&self, uid: u64, result: Outcome) -> Result<(), StoreError>;

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GameNotFound`] if no such record exists.
    fn delete_game(&self, uid: u64) -> Result<(), StoreError>;

    /// Returns every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn all_games(&self) -> Result<Vec<GameRecord>, StoreError>;

    /// Returns the high-score row, if one has been created.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn high_scores(&self) -> Result<Option<HighScores>, StoreError>;

    /// Creates the high-score row. An existing row is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_high_scores(&self, scores: HighScores) -> Result<(), StoreError>;

    /// Sets the best chip balance.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoHighScores`] if the row does not exist.
    fn update_best_chips(&self, value: u32) -> Result<(), StoreError>;

    /// Sets the best bet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoHighScores`] if the row does not exist.
    fn update_best_bet(&self, value: u32) -> Result<(), StoreError>;

    /// Sets the best win streak.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoHighScores`] if the row does not exist.
    fn update_best_streak(&self, value: u32) -> Result<(), StoreError>;
}

macro_rules! forward_store {
    ($($ty:ty),+) => {$(
        impl<T: GameStore + ?Sized> GameStore for $ty {
            fn insert_game(&self, record: GameRecord) -> Result<u64, StoreError> {
                (**self).insert_game(record)
            }
            fn game_by_id(&self, uid: u64) -> Result<Option<GameRecord>, StoreError> {
                (**self).game_by_id(uid)
            }
            fn last_unresolved_game(&self) -> Result<Option<GameRecord>, StoreError> {
                (**self).last_unresolved_game()
            }
            fn update_game(&self, record: GameRecord) -> Result<(), StoreError> {
                (**self).update_game(record)
            }
            fn update_game_seed(&self, uid: u64, seed: u64) -> Result<(), StoreError> {
                (**self).update_game_seed(uid, seed)
            }
            fn update_game_result(&self, uid: u64, result: Outcome) -> Result<(), StoreError> {
                (**self).update_game_result(uid, result)
            }
            fn delete_game(&self, uid: u64) -> Result<(), StoreError> {
                (**self).delete_game(uid)
            }
            fn all_games(&self) -> Result<Vec<GameRecord>, StoreError> {
                (**self).all_games()
            }
            fn high_scores(&self) -> Result<Option<HighScores>, StoreError> {
                (**self).high_scores()
            }
            fn insert_high_scores(&self, scores: HighScores) -> Result<(), StoreError> {
                (**self).insert_high_scores(scores)
            }
            fn update_best_chips(&self, value: u32) -> Result<(), StoreError> {
                (**self).update_best_chips(value)
            }
            fn update_best_bet(&self, value: u32) -> Result<(), StoreError> {
                (**self).update_best_bet(value)
            }
            fn update_best_streak(&self, value: u32) -> Result<(), StoreError> {
                (**self).update_best_streak(value)
            }
        }
    )+};
}

forward_store!(&T, Arc<T>);

#[derive(Debug)]
struct Tables {
    games: Vec<GameRecord>,
    next_uid: u64,
    high_scores: Option<HighScores>,
}

impl Tables {
    fn game_mut(&mut self, uid: u64) -> Result<&mut GameRecord, StoreError> {
        self.games
            .iter_mut()
            .find(|g| g.uid == uid)
            .ok_or(StoreError::GameNotFound(uid))
    }

    fn scores_mut(&mut self) -> Result<&mut HighScores, StoreError> {
        self.high_scores.as_mut().ok_or(StoreError::NoHighScores)
    }
}

/// In-process [`GameStore`]. Ids start at 1.
#[derive(Debug)]
pub struct MemoryStore {
    tables: Shared<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables: Shared::new(Tables {
                games: Vec::new(),
                next_uid: 1,
                high_scores: None,
            }),
        }
    }

    /// Returns the number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.with(|t| t.games.len())
    }

    /// Returns whether no games are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore for MemoryStore {
    fn insert_game(&self, mut record: GameRecord) -> Result<u64, StoreError> {
        self.tables.with(|t| {
            let uid = t.next_uid;
            t.next_uid += 1;
            record.uid = uid;
            t.games.push(record);
            Ok(uid)
        })
    }

    fn game_by_id(&self, uid: u64) -> Result<Option<GameRecord>, StoreError> {
        self.tables
            .with(|t| Ok(t.games.iter().find(|g| g.uid == uid).cloned()))
    }

    fn last_unresolved_game(&self) -> Result<Option<GameRecord>, StoreError> {
        self.tables.with(|t| {
            Ok(t.games
                .iter()
                .filter(|g| g.result.is_none())
                .max_by_key(|g| g.uid)
                .cloned())
        })
    }

    fn update_game(&self, record: GameRecord) -> Result<(), StoreError> {
        self.tables.with(|t| {
            let uid = record.uid;
            *t.game_mut(uid)? = record;
            Ok(())
        })
    }

    fn update_game_seed(&self, uid: u64, seed: u64) -> Result<(), StoreError> {
        self.tables.with(|t| {
            t.game_mut(uid)?.deck_seed = Some(seed);
            Ok(())
        })
    }

    fn update_game_result(&self, uid: u64, result: Outcome) -> Result<(), StoreError> {
        self.tables.with(|t| {
            t.game_mut(uid)?.result = Some(result);
            Ok(())
        })
    }

    fn delete_game(&self, uid: u64) -> Result<(), StoreError> {
        self.tables.with(|t| {
            let before = t.games.len();
            t.games.retain(|g| g.uid != uid);
            if t.games.len() == before {
                Err(StoreError::GameNotFound(uid))
            } else {
                Ok(())
            }
        })
    }

    fn all_games(&self) -> Result<Vec<GameRecord>, StoreError> {
        self.tables.with(|t| Ok(t.games.clone()))
    }

    fn high_scores(&self) -> Result<Option<HighScores>, StoreError> {
        self.tables.with(|t| Ok(t.high_scores))
    }

    fn insert_high_scores(&self, scores: HighScores) -> Result<(), StoreError> {
        self.tables.with(|t| {
            t.high_scores.get_or_insert(scores);
            Ok(())
        })
    }

    fn update_best_chips(&self, value: u32) -> Result<(), StoreError> {
        self.tables.with(|t| {
            t.scores_mut()?.chips_value = value;
            Ok(())
        })
    }

    fn update_best_bet(&self, value: u32) -> Result<(), StoreError> {
        self.tables.with(|t| {
            t.scores_mut()?.bet_value = value;
            Ok(())
        })
    }

    fn update_best_streak(&self, value: u32) -> Result<(), StoreError> {
        self.tables.with(|t| {
            t.scores_mut()?.streak = value;
            Ok(())
        })
    }
}
