//! Error types for round operations.

use thiserror::Error;

/// The deck ran out of cards.
///
/// A single deck holds far more cards than a round can use, so this signals
/// a broken caller or a short stacked deck. The round should be abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct ExhaustedDeckError;

/// Errors that can occur while placing a bid.
///
/// All of these leave the round in the bidding phase, unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidError {
    /// Bid amount is zero or negative.
    #[error("bid must be greater than zero")]
    ZeroOrNegativeBid,
    /// Bid amount exceeds the balance.
    #[error("insufficient funds: balance {balance}, bid {bid}")]
    InsufficientFunds {
        /// Balance available for the round.
        balance: u64,
        /// Amount that was requested.
        bid: u64,
    },
    /// Bidding is already over for this round.
    #[error("invalid round phase for bidding")]
    InvalidState,
    /// The deck cannot supply the opening deal.
    #[error("not enough cards in the deck to deal")]
    NotEnoughCards,
}

impl BidError {
    /// Returns whether this is one of the invalid-amount errors shown to the
    /// player, as opposed to a misuse of the round.
    #[must_use]
    pub const fn is_invalid_bid(&self) -> bool {
        matches!(self, Self::ZeroOrNegativeBid | Self::InsufficientFunds { .. })
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// The deck ran out while dealing.
    #[error(transparent)]
    ExhaustedDeck(#[from] ExhaustedDeckError),
}
