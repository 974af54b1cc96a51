//! Table configuration options.

/// Configuration options for a [`Table`](crate::table::Table).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_chips(500)
///     .with_default_bet(50);
/// assert_eq!(options.starting_chips, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Chips given to a new player and after a reset.
    pub starting_chips: u32,
    /// Bet offered for the first round and after a reset.
    pub default_bet: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: 100,
            default_bet: 25,
        }
    }
}

impl TableOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(1000);
    /// assert_eq!(options.starting_chips, 1000);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: u32) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the default bet.
    #[must_use]
    pub const fn with_default_bet(mut self, bet: u32) -> Self {
        self.default_bet = bet;
        self
    }
}
