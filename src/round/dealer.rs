use core::cmp::Ordering;

use crate::error::ExhaustedDeckError;
use crate::result::{Outcome, RoundResult};

use super::{Phase, Round};

impl Round {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws while the hand is below `dealer_stands_on`. There is
    /// no soft-17 distinction: a soft 17 stands like a hard one.
    pub(super) fn dealer_play(&mut self) -> Result<(), ExhaustedDeckError> {
        while self.dealer_hand.hand().value() < self.options.dealer_stands_on {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }

        let value = self.dealer_hand.hand().value();
        if value > 21 {
            log::debug!("dealer busts with {value}");
            self.decided = Some(Outcome::DealerBust);
        } else {
            log::debug!("dealer stands on {value}");
        }

        Ok(())
    }

    /// Settles the round and applies the payout to the balance.
    ///
    /// This:
    /// 1. Reveals the dealer's hole card
    /// 2. Takes the outcome already decided by a bust, or else compares the
    ///    two hand values
    /// 3. Overrides the outcome with [`Outcome::Blackjack`] when the player
    ///    holds exactly two cards worth 21
    /// 4. Adds the payout to the balance
    ///
    /// Settling an already settled round returns the stored result and pays
    /// nothing again.
    pub fn settle(&mut self) -> RoundResult {
        if let Some(result) = self.result {
            return result;
        }

        self.dealer_hand.reveal_hole();

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.hand().value();

        let mut outcome = self
            .decided
            .unwrap_or(match player_value.cmp(&dealer_value) {
                Ordering::Greater => Outcome::PlayerWins,
                Ordering::Less => Outcome::DealerWins,
                Ordering::Equal => Outcome::Tie,
            });

        // Overrides the comparison: a two-card 21 pays as blackjack whatever
        // the dealer holds.
        if self.player_hand.is_natural_blackjack() {
            outcome = Outcome::Blackjack;
        }

        let payout = outcome.payout(self.bid, self.options.blackjack_pays);
        self.balance = self.balance.saturating_add_signed(payout);
        self.phase = Phase::Settled;

        let result = RoundResult {
            outcome,
            bid: self.bid,
            payout,
            balance: self.balance,
            player_value,
            dealer_value,
        };
        self.result = Some(result);

        log::info!(
            "round settled: {outcome:?}, player {player_value} vs dealer {dealer_value}, \
             payout {payout}, balance {}",
            self.balance
        );

        result
    }
}
