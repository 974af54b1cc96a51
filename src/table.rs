//! A player's session at the table: chip balance, persisted rounds and
//! high scores.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::clock::Clock;
use crate::error::TableError;
use crate::options::TableOptions;
use crate::record::{GameRecord, HighScores};
use crate::result::Settlement;
use crate::round::RoundState;
use crate::scores::update_high_scores;
use crate::store::GameStore;

/// Drives rounds for one player and keeps the store in step with them.
///
/// Every round is written to the store as soon as its bet is placed, together
/// with the deck seed, so a round abandoned part-way can be dealt again with
/// the same cards by [`Table::resume`].
///
/// # Example
///
/// ```
/// use bjcore::{MemoryStore, Phase, Table, TableOptions};
///
/// let clock = || String::from("2024-01-01T00:00:00");
/// let mut table = Table::new(MemoryStore::new(), clock, TableOptions::default(), 7);
///
/// let round = table.start_round(25).unwrap();
/// let (round, _events) = round.advance().unwrap();
/// let round = if round.phase() == Phase::PlayerTurn {
///     round.hold().unwrap().advance().unwrap().0
/// } else {
///     round
/// };
///
/// let settlement = table.finish_round(&round).unwrap();
/// assert_eq!(table.chips(), settlement.chips_after);
/// ```
#[derive(Debug)]
pub struct Table<S, C> {
    store: S,
    clock: C,
    options: TableOptions,
    chips: u32,
    bet: u32,
    game_id: Option<u64>,
    rng: ChaCha8Rng,
}

impl<S: GameStore, C: Clock> Table<S, C> {
    /// Creates a table with the starting balance from `options`.
    ///
    /// `seed` feeds the generator that produces fresh deck seeds.
    #[must_use]
    pub fn new(store: S, clock: C, options: TableOptions, seed: u64) -> Self {
        Self {
            store,
            clock,
            options,
            chips: options.starting_chips,
            bet: options.default_bet,
            game_id: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Picks up the most recent unfinished round, if any.
    ///
    /// The balance, bet and game id are restored from the record and the
    /// round is dealt again from its stored seed, reproducing the original
    /// card order. A record without a seed gets a fresh one.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the stored bet is not valid
    /// for the stored balance.
    pub fn resume(&mut self) -> Result<Option<RoundState>, TableError> {
        let Some(record) = self.store.last_unresolved_game()? else {
            return Ok(None);
        };

        if record.deck_seed.is_none() {
            tracing::warn!(uid = record.uid, "unfinished game has no deck seed, reshuffling");
        }

        let round = RoundState::new(record.chips_value).place_bet(
            record.bet_value,
            record.deck_seed,
            &mut self.rng,
        )?;

        self.chips = record.chips_value;
        self.bet = record.bet_value;
        self.game_id = Some(record.uid);

        if let Some(seed) = round.seed() {
            self.store.update_game_seed(record.uid, seed)?;
        }

        tracing::info!(uid = record.uid, chips = self.chips, bet = self.bet, "game resumed");
        Ok(Some(round))
    }

    /// Starts a new round at `bet` and records it as in progress.
    ///
    /// The returned round is in the `Dealing` phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is invalid for the current balance or the
    /// store fails.
    pub fn start_round(&mut self, bet: u32) -> Result<RoundState, TableError> {
        let round = RoundState::new(self.chips).place_bet(bet, None, &mut self.rng)?;

        let uid = self
            .store
            .insert_game(GameRecord::in_progress(self.chips, bet, self.clock.now()))?;
        if let Some(seed) = round.seed() {
            self.store.update_game_seed(uid, seed)?;
        }

        self.bet = bet;
        self.game_id = Some(uid);

        tracing::info!(uid, chips = self.chips, bet, "game started");
        Ok(round)
    }

    /// Applies a resolved round to the balance and the store, then refreshes
    /// the high scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved, no round was started
    /// at this table, or the store fails.
    pub fn finish_round(&mut self, round: &RoundState) -> Result<Settlement, TableError> {
        let settlement = *round.settlement().ok_or(TableError::RoundNotResolved)?;
        let uid = self.game_id.ok_or(TableError::NoActiveGame)?;

        self.store.update_game(GameRecord {
            uid,
            chips_value: settlement.chips_after,
            bet_value: settlement.bet,
            date: self.clock.now(),
            result: Some(settlement.outcome),
            deck_seed: round.seed(),
        })?;

        self.chips = settlement.chips_after;
        self.bet = settlement.bet.min(self.chips);
        self.game_id = None;

        update_high_scores(&self.store)?;

        if self.is_out_of_chips() {
            tracing::info!(uid, "player is out of chips");
        }

        Ok(settlement)
    }

    /// Returns the table to the starting balance and default bet.
    pub fn reset(&mut self) {
        self.chips = self.options.starting_chips;
        self.bet = self.options.default_bet;
        self.game_id = None;
    }

    /// Returns the stored high scores, or zeros if none were recorded yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn high_scores(&self) -> Result<HighScores, TableError> {
        Ok(self.store.high_scores()?.unwrap_or_default())
    }

    /// Returns every stored round in chronological order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn history(&self) -> Result<Vec<GameRecord>, TableError> {
        Ok(self.store.all_games()?)
    }

    /// Returns the current chip balance.
    #[must_use]
    pub const fn chips(&self) -> u32 {
        self.chips
    }

    /// Returns the bet offered for the next round.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Returns the id of the round in progress.
    #[must_use]
    pub const fn game_id(&self) -> Option<u64> {
        self.game_id
    }

    /// Returns whether the player can no longer place a bet.
    #[must_use]
    pub const fn is_out_of_chips(&self) -> bool {
        self.chips == 0
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
