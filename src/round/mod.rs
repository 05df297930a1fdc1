//! Round engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ExhaustedDeckError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};

mod actions;
mod bid;
mod dealer;
pub mod state;

pub use state::Phase;

/// One play of blackjack: bidding, dealing, the player's turn, the dealer's
/// turn and settlement.
///
/// The round owns its deck and both hands. The balance is read once at
/// construction and changes only when the round settles; persisting it is
/// the caller's job (see `Table` for a session that does this).
///
/// # Example
///
/// ```
/// use bjround::{GameOptions, Phase, Round};
///
/// let mut round = Round::new(100, GameOptions::default(), 42);
/// round.place_bid(10).unwrap();
/// assert_eq!(round.phase(), Phase::PlayerTurn);
/// let result = round.stand().unwrap();
/// assert_eq!(round.balance(), result.balance);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards left to deal.
    deck: Deck,
    /// Rule options.
    options: GameOptions,
    /// Current phase.
    phase: Phase,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: DealerHand,
    /// Current bid (0 until bidding ends).
    bid: u64,
    /// Balance available to the player.
    balance: u64,
    /// Whether the player has doubled down.
    bid_doubled: bool,
    /// Outcome already decided by a bust, awaiting settlement.
    decided: Option<Outcome>,
    /// Settlement, once the round is over.
    result: Option<RoundResult>,
}

impl Round {
    /// Creates a new round with a deck shuffled from `seed`.
    #[must_use]
    pub fn new(balance: u64, options: GameOptions, seed: u64) -> Self {
        Self::with_deck(balance, options, Deck::from_seed(seed))
    }

    /// Creates a new round that deals from the given deck.
    #[must_use]
    pub const fn with_deck(balance: u64, options: GameOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            phase: Phase::Bidding,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            bid: 0,
            balance,
            bid_doubled: false,
            decided: None,
            result: None,
        }
    }

    /// Deals one card from the deck.
    fn draw(&mut self) -> Result<Card, ExhaustedDeckError> {
        self.deck.deal_card()
    }

    /// Returns the rule options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand. The hole card stays hidden until the round
    /// settles.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the current bid.
    #[must_use]
    pub const fn bid(&self) -> u64 {
        self.bid
    }

    /// Returns the balance. Before settlement this is the opening balance.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns whether the player has doubled down this round.
    #[must_use]
    pub const fn is_bid_doubled(&self) -> bool {
        self.bid_doubled
    }

    /// Returns the outcome, or `None` until the round is settled.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.result.map(|result| result.outcome)
    }

    /// Returns the settlement, or `None` until the round is settled.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns whether the round is over.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
