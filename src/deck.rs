//! The shuffled card supply for a single round.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ExhaustedDeckError;

/// A single 52-card deck.
///
/// The top of the deck is the end of the internal vector, so dealing is a
/// `pop`. Cards never return to the deck once dealt.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds every rank and suit combination and shuffles it with `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a shuffled deck from a seed, so the same seed always deals the
    /// same cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::Deck;
    ///
    /// let mut a = Deck::from_seed(7);
    /// let mut b = Deck::from_seed(7);
    /// assert_eq!(a.deal_card(), b.deal_card());
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    /// Builds a deck that deals `draws` in order, first element first.
    ///
    /// The cards are taken as given: no size or uniqueness checks are made.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedDeckError`] if no cards are left.
    pub fn deal_card(&mut self) -> Result<Card, ExhaustedDeckError> {
        self.cards.pop().ok_or(ExhaustedDeckError)
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
