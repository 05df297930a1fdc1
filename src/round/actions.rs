use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

use super::{Phase, Round};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Gives the player a card and settles the round if it busts.
    fn give_player(&mut self, card: Card) {
        self.player_hand.add_card(card);

        if self.player_hand.is_bust() {
            log::debug!("player busts with {}", self.player_hand.value());
            self.decided = Some(Outcome::PlayerBust);
            self.settle();
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust settles the round immediately as [`Outcome::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;
        let card = self.draw()?;
        self.give_player(card);
        Ok(card)
    }

    /// Returns whether [`Round::double_down`] would be accepted right now.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.phase == Phase::PlayerTurn
            && !self.bid_doubled
            && self
                .bid
                .checked_mul(2)
                .is_some_and(|doubled| self.balance >= doubled)
    }

    /// Player action: Double down.
    ///
    /// Doubles the bid and deals exactly one card, with the same bust check
    /// as [`Round::hit`]. The turn is not forced to end.
    ///
    /// Returns `Ok(None)` without changing anything when the bid was already
    /// doubled this round or the balance cannot cover twice the bid.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn double_down(&mut self) -> Result<Option<Card>, ActionError> {
        self.ensure_player_turn()?;

        if !self.can_double_down() {
            log::debug!(
                "double down ignored: doubled={}, bid {}, balance {}",
                self.bid_doubled,
                self.bid,
                self.balance
            );
            return Ok(None);
        }

        let card = self.draw()?;
        self.bid *= 2;
        self.bid_doubled = true;
        log::debug!("bid doubled to {}", self.bid);

        self.give_player(card);
        Ok(Some(card))
    }

    /// Player action: Stand.
    ///
    /// The dealer plays out their hand and the round settles.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out
    /// while the dealer draws. In the latter case the round is stuck in
    /// [`Phase::DealerTurn`] and should be discarded.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;
        self.phase = Phase::DealerTurn;
        self.dealer_play()?;
        Ok(self.settle())
    }
}
