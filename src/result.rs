//! Round outcome and settlement types.

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Outcome {
    /// Player beats the dealer, or the dealer busts.
    Win,
    /// Player busts, or the dealer finishes closer to 21.
    Lose,
    /// Equal totals of 21 or less.
    Draw,
}

impl Outcome {
    /// Decides the outcome from final totals.
    ///
    /// ```
    /// use bjcore::Outcome;
    ///
    /// assert_eq!(Outcome::decide(22, 18), Outcome::Win);
    /// assert_eq!(Outcome::decide(20, 22), Outcome::Lose);
    /// assert_eq!(Outcome::decide(20, 20), Outcome::Draw);
    /// ```
    #[must_use]
    pub const fn decide(dealer_value: u32, player_value: u32) -> Self {
        if player_value > 21 || (dealer_value <= 21 && player_value < dealer_value) {
            Self::Lose
        } else if player_value > dealer_value || dealer_value > 21 {
            Self::Win
        } else {
            Self::Draw
        }
    }

    /// Chip change for a round played at `bet`.
    #[must_use]
    pub fn chip_delta(self, bet: u32) -> i64 {
        match self {
            Self::Win => i64::from(bet),
            Self::Lose => -i64::from(bet),
            Self::Draw => 0,
        }
    }
}

/// Final accounting of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The amount wagered.
    pub bet: u32,
    /// The dealer's final hand value.
    pub dealer_value: u32,
    /// The player's final hand value.
    pub player_value: u32,
    /// Chip balance when the bet was placed.
    pub chips_before: u32,
    /// Chip balance after applying the outcome.
    pub chips_after: u32,
}

impl Settlement {
    pub(crate) const fn new(
        dealer_value: u32,
        player_value: u32,
        bet: u32,
        chips_before: u32,
    ) -> Self {
        let outcome = Outcome::decide(dealer_value, player_value);
        let chips_after = match outcome {
            Outcome::Win => chips_before.saturating_add(bet),
            Outcome::Lose => chips_before.saturating_sub(bet),
            Outcome::Draw => chips_before,
        };

        Self {
            outcome,
            bet,
            dealer_value,
            player_value,
            chips_before,
            chips_after,
        }
    }

    /// Net change in chips (positive = profit).
    #[must_use]
    pub fn delta(&self) -> i64 {
        self.outcome.chip_delta(self.bet)
    }

    /// Returns whether the dealer finished over 21.
    #[must_use]
    pub const fn dealer_bust(&self) -> bool {
        self.dealer_value > 21
    }

    /// Returns whether the player finished over 21.
    #[must_use]
    pub const fn player_bust(&self) -> bool {
        self.player_value > 21
    }
}
