use crate::error::BidError;

use super::{Phase, Round};

/// Cards needed for the opening deal: two each for player and dealer.
const OPENING_CARDS: usize = 4;

impl Round {
    /// Places the bid and deals the opening hands.
    ///
    /// The player and dealer each get two cards, alternating player first.
    /// The dealer's first card is the hole card. The balance is not touched
    /// until the round settles.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is past bidding, the amount is zero or
    /// negative, the amount exceeds the balance, or the deck cannot supply
    /// the opening deal. The round is unchanged in every case.
    pub fn place_bid(&mut self, amount: i64) -> Result<(), BidError> {
        if self.phase != Phase::Bidding {
            return Err(BidError::InvalidState);
        }

        let Ok(bid) = u64::try_from(amount) else {
            return Err(BidError::ZeroOrNegativeBid);
        };
        if bid == 0 {
            return Err(BidError::ZeroOrNegativeBid);
        }

        if bid > self.balance {
            log::debug!("rejected bid {bid}: balance is {}", self.balance);
            return Err(BidError::InsufficientFunds {
                balance: self.balance,
                bid,
            });
        }

        if self.deck.len() < OPENING_CARDS {
            return Err(BidError::NotEnoughCards);
        }

        self.bid = bid;

        // Player, dealer hole, player, dealer up.
        for _ in 0..2 {
            let card = self.draw().map_err(|_| BidError::NotEnoughCards)?;
            self.player_hand.add_card(card);
            let card = self.draw().map_err(|_| BidError::NotEnoughCards)?;
            self.dealer_hand.add_card(card);
        }

        self.phase = Phase::PlayerTurn;
        log::debug!(
            "bid {bid} placed; player shows {}",
            self.player_hand.value()
        );

        Ok(())
    }
}
