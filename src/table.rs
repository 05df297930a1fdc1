//! A play session: one bankroll, one round at a time.

use thiserror::Error;

use crate::bankroll::{Bankroll, BankrollError};
use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, BidError};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::round::Round;

/// Errors that can occur during a session.
#[derive(Debug, Error)]
pub enum TableError {
    /// No round is in progress.
    #[error("no round in progress")]
    NoRound,
    /// The bid was rejected.
    #[error(transparent)]
    Bid(#[from] BidError),
    /// The action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The balance could not be persisted.
    #[error(transparent)]
    Bankroll(#[from] BankrollError),
}

/// A session that owns the bankroll and drives one [`Round`] at a time.
///
/// The balance is loaded once when the table opens and stored exactly once
/// for every round that settles. A round left before it settles is
/// discarded and its bid is never charged.
///
/// # Example
///
/// ```
/// use bjround::{GameOptions, MemoryBankroll, Table};
///
/// let mut table = Table::open(MemoryBankroll::new(100), GameOptions::default()).unwrap();
/// table.start_round(3);
/// table.place_bid(10).unwrap();
/// let result = table.stand().unwrap();
/// assert_eq!(table.balance(), result.balance);
/// assert_eq!(table.bankroll().stores(), 1);
/// ```
#[derive(Debug)]
pub struct Table<B: Bankroll> {
    bankroll: B,
    options: GameOptions,
    balance: u64,
    round: Option<Round>,
    recorded: bool,
    unsaved: Option<u64>,
}

impl<B: Bankroll> Table<B> {
    /// Opens a table, loading the balance from `bankroll`.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance cannot be loaded.
    pub fn open(mut bankroll: B, options: GameOptions) -> Result<Self, BankrollError> {
        let balance = bankroll.load()?;
        log::info!("table opened with balance {balance}");

        Ok(Self {
            bankroll,
            options,
            balance,
            round: None,
            recorded: false,
            unsaved: None,
        })
    }

    /// Returns the session balance, as last settled.
    ///
    /// This moves as soon as a round settles, even if storing it failed; see
    /// [`Table::flush`].
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns the rule options used for new rounds.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> &B {
        &self.bankroll
    }

    /// Returns the current round, if any.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Starts a new round with a deck shuffled from `seed`.
    ///
    /// Any unsettled round is discarded first.
    pub fn start_round(&mut self, seed: u64) -> &Round {
        self.start_round_with_deck(Deck::from_seed(seed))
    }

    /// Starts a new round dealing from `deck`.
    ///
    /// Any unsettled round is discarded first.
    pub fn start_round_with_deck(&mut self, deck: Deck) -> &Round {
        self.leave_round();
        self.recorded = false;
        self.round
            .insert(Round::with_deck(self.balance, self.options, deck))
    }

    /// Discards the current round. An unsettled round is not charged.
    pub fn leave_round(&mut self) {
        if let Some(round) = self.round.take().filter(|round| !round.is_settled()) {
            log::debug!("round discarded unsettled, bid {}", round.bid());
        }
        self.retry_flush();
    }

    /// Returns whether a settled balance is still waiting to be stored.
    #[must_use]
    pub const fn has_unsaved_balance(&self) -> bool {
        self.unsaved.is_some()
    }

    /// Stores a settled balance that an earlier store failed to write.
    ///
    /// # Errors
    ///
    /// Returns an error if the bankroll still cannot be written. The balance
    /// stays pending and the next call tries again.
    pub fn flush(&mut self) -> Result<(), BankrollError> {
        if let Some(balance) = self.unsaved {
            self.bankroll.store(balance)?;
            self.unsaved = None;
        }
        Ok(())
    }

    fn retry_flush(&mut self) {
        if let Err(err) = self.flush() {
            log::warn!("balance still not stored: {err}");
        }
    }

    /// Consumes the table and returns the bankroll.
    #[must_use]
    pub fn into_bankroll(self) -> B {
        self.bankroll
    }

    fn round_mut(&mut self) -> Result<&mut Round, TableError> {
        self.round.as_mut().ok_or(TableError::NoRound)
    }

    /// Takes the balance the first time the current round is seen settled,
    /// then stores it.
    fn record_settlement(&mut self) -> Result<(), BankrollError> {
        if !self.recorded {
            if let Some(result) = self.round.as_ref().and_then(Round::result) {
                self.balance = result.balance;
                self.unsaved = Some(result.balance);
                self.recorded = true;
            }
        }

        self.flush()
    }

    /// Drops the round when the deck ran out, then passes the error on.
    fn check_action<T>(&mut self, attempt: Result<T, ActionError>) -> Result<T, TableError> {
        match attempt {
            Ok(value) => Ok(value),
            Err(err @ ActionError::ExhaustedDeck(_)) => {
                log::warn!("round aborted: {err}");
                self.round = None;
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Places the bid on the current round.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no round or the bid is rejected.
    pub fn place_bid(&mut self, amount: i64) -> Result<(), TableError> {
        self.round_mut()?.place_bid(amount)?;
        Ok(())
    }

    /// Hits on the current round, storing the balance if the player busts.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no round, the action is rejected, or the
    /// balance cannot be stored.
    pub fn hit(&mut self) -> Result<Card, TableError> {
        let attempt = self.round_mut()?.hit();
        let card = self.check_action(attempt)?;
        self.record_settlement()?;
        Ok(card)
    }

    /// Doubles down on the current round. `Ok(None)` means the double was
    /// not allowed and nothing changed.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no round, the action is rejected, or the
    /// balance cannot be stored.
    pub fn double_down(&mut self) -> Result<Option<Card>, TableError> {
        let attempt = self.round_mut()?.double_down();
        let card = self.check_action(attempt)?;
        self.record_settlement()?;
        Ok(card)
    }

    /// Stands on the current round and stores the settled balance.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no round, the action is rejected, or the
    /// balance cannot be stored.
    pub fn stand(&mut self) -> Result<RoundResult, TableError> {
        let attempt = self.round_mut()?.stand();
        let result = self.check_action(attempt)?;
        self.record_settlement()?;
        Ok(result)
    }
}
