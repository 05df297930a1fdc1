//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that runs one play of blackjack:
//! bidding, the opening deal, hit/stand/double down, the dealer's draw and
//! settlement. A front end calls the round's operations in response to the
//! player and renders whatever state the round exposes.
//!
//! With the `std` feature, [`Table`] adds a session on top of a persisted
//! [`Bankroll`], storing the balance once per settled round.
//!
//! # Example
//!
//! ```
//! use bjround::{GameOptions, Phase, Round};
//!
//! let mut round = Round::new(100, GameOptions::default(), 42);
//! round.place_bid(20).unwrap();
//! while round.phase() == Phase::PlayerTurn && round.player_hand().value() < 12 {
//!     round.hit().unwrap();
//! }
//! let result = round.settle();
//! assert_eq!(round.outcome(), Some(result.outcome));
//! assert_eq!(result.balance, round.balance());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod bankroll;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BidError, ExhaustedDeckError};
pub use hand::{DealerHand, Hand};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
pub use round::{Phase, Round};

#[cfg(feature = "std")]
pub use bankroll::{Bankroll, BankrollError, DEFAULT_BALANCE, FileBankroll, MemoryBankroll};
#[cfg(feature = "std")]
pub use table::{Table, TableError};
