//! Round outcome and settlement types.

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player holds a two-card 21.
    Blackjack,
    /// Player has the higher value.
    PlayerWins,
    /// Dealer has the higher value.
    DealerWins,
    /// Both hands have the same value.
    Tie,
}

impl Outcome {
    /// Returns the balance change for this outcome on the given bid.
    ///
    /// Losses cost the bid, wins pay the bid, a tie pays nothing, and a
    /// blackjack pays `bid * blackjack_pays` truncated toward zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::Outcome;
    ///
    /// assert_eq!(Outcome::Blackjack.payout(15, 1.5), 22);
    /// assert_eq!(Outcome::DealerWins.payout(15, 1.5), -15);
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        reason = "bids are bounded by the balance and far below 2^53"
    )]
    pub fn payout(self, bid: u64, blackjack_pays: f64) -> i64 {
        let bid = bid as i64;
        match self {
            Self::PlayerBust | Self::DealerWins => -bid,
            Self::DealerBust | Self::PlayerWins => bid,
            Self::Blackjack => ((bid as f64) * blackjack_pays) as i64,
            Self::Tie => 0,
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::Blackjack | Self::PlayerWins)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The final bid, doubled if the player doubled down.
    pub bid: u64,
    /// Change applied to the balance (negative on a loss).
    pub payout: i64,
    /// Balance after the payout.
    pub balance: u64,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
}
