use rand::RngCore;

use crate::deck::Deck;
use crate::error::{ActionError, BetError};

use super::{DealEvent, OPENING_CARDS, Phase, RoundState, Seat};

impl RoundState {
    /// Places a bet and shuffles a fresh deck for the round.
    ///
    /// When `seed` is `None` a new seed is drawn from `entropy`; pass the
    /// seed stored for an interrupted round to replay its exact card order.
    /// The seed actually used is available from [`RoundState::seed`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a bet, the bet is
    /// zero, or the bet exceeds the available chips.
    pub fn place_bet<R: RngCore + ?Sized>(
        &self,
        bet: u32,
        seed: Option<u64>,
        entropy: &mut R,
    ) -> Result<Self, BetError> {
        self.check_bet(bet)?;

        let mut deck = Deck::new();
        let seed = deck.shuffle(seed, entropy);

        self.place_bet_with_deck(bet, deck, seed)
    }

    /// Places a bet using an already prepared deck.
    ///
    /// `seed` is recorded as the seed that produced `deck`.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a bet, the bet is
    /// zero, or the bet exceeds the available chips.
    pub fn place_bet_with_deck(&self, bet: u32, deck: Deck, seed: u64) -> Result<Self, BetError> {
        self.check_bet(bet)?;

        tracing::info!(bet, chips = self.chips, seed, "bet placed");

        Ok(Self {
            phase: Phase::Dealing,
            deck,
            bet,
            seed: Some(seed),
            ..Self::new(self.chips)
        })
    }

    const fn check_bet(&self, bet: u32) -> Result<(), BetError> {
        if !matches!(self.phase, Phase::AwaitingBet) {
            return Err(BetError::InvalidState);
        }
        if bet == 0 {
            return Err(BetError::ZeroBet);
        }
        if bet > self.chips {
            return Err(BetError::InsufficientFunds);
        }
        Ok(())
    }

    /// Deals the next opening card.
    ///
    /// Cards alternate starting with the dealer; only the dealer's first card
    /// is dealt face down. After the fourth card the hands are checked for a
    /// 21, which ends the player's turn before it starts.
    pub(super) fn deal_step(&self) -> Result<(Self, DealEvent), ActionError> {
        let mut next = self.clone();

        let dealt = next.dealer.len() + next.player.len();
        let (seat, face_up) = if dealt % 2 == 0 {
            (Seat::Dealer, dealt != 0)
        } else {
            (Seat::Player, true)
        };
        let card = next.draw_into(seat, face_up)?;

        if dealt + 1 == OPENING_CARDS {
            let dealer_peek = next.dealer.full_value();
            let player_value = next.player.value();

            next.phase = if dealer_peek == 21 || player_value == 21 {
                tracing::debug!(dealer_peek, player_value, "21 on the deal, player turn skipped");
                Phase::DealerTurn
            } else {
                Phase::PlayerTurn
            };
        }

        Ok((next, DealEvent::Dealt { seat, card }))
    }
}
