use crate::error::ActionError;
use crate::result::Settlement;

use super::{DealEvent, Phase, RoundState, Seat};

impl RoundState {
    /// Returns whether the dealer takes another card.
    ///
    /// The dealer stands on the dealt hand against a player natural. Otherwise
    /// it draws while it is below the player's total and has not busted; there
    /// is no fixed standing threshold.
    #[must_use]
    pub fn dealer_must_draw(&self) -> bool {
        if self.player.is_natural() {
            return false;
        }

        let dealer_value = self.dealer.full_value();
        dealer_value <= 21 && dealer_value < self.player.value()
    }

    /// One step of the dealer's turn: reveal, draw, or settle.
    pub(super) fn dealer_step(&self) -> Result<(Self, DealEvent), ActionError> {
        let mut next = self.clone();

        if let Some(card) = next.dealer.reveal_hole() {
            tracing::debug!(card = %card, "dealer reveals hole card");
            return Ok((next, DealEvent::Revealed(card)));
        }

        if next.dealer_must_draw() {
            let card = next.draw_into(Seat::Dealer, true)?;
            return Ok((next, DealEvent::Dealt { seat: Seat::Dealer, card }));
        }

        let settlement = Settlement::new(
            next.dealer.full_value(),
            next.player.full_value(),
            next.bet,
            next.chips,
        );
        tracing::info!(
            outcome = ?settlement.outcome,
            dealer = settlement.dealer_value,
            player = settlement.player_value,
            chips = settlement.chips_after,
            "round resolved"
        );

        next.settlement = Some(settlement);
        next.phase = Phase::Resolved;
        Ok((next, DealEvent::Resolved(settlement)))
    }
}
