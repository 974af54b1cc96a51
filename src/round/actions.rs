use crate::card::Card;
use crate::error::ActionError;

use super::{Phase, RoundState, Seat};

impl RoundState {
    /// Player action: Hit (draw a face-up card).
    ///
    /// The player's turn ends automatically on 21 or a bust.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&self) -> Result<(Self, Card), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut next = self.clone();
        let card = next.draw_into(Seat::Player, true)?;

        let value = next.player.value();
        if value >= 21 {
            tracing::debug!(value, "player turn over");
            next.phase = Phase::DealerTurn;
        }

        Ok((next, card))
    }

    /// Player action: Hold (end the turn without drawing).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hold(&self) -> Result<Self, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        tracing::debug!(value = self.player.value(), "player holds");

        let mut next = self.clone();
        next.phase = Phase::DealerTurn;
        Ok(next)
    }
}
