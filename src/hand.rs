//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value += card.rank.value();
    }

    // Re-count one ace as 1 at a time until the total fits.
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// An ordered hand of cards, in deal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Every ace starts at 11. While the total is over 21 and an ace is still
    /// counted as 11, one such ace is re-counted as 1.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Card, Hand, Rank, Suit};
    ///
    /// let hand: Hand = [
    ///     Card::new(Rank::Ace, Suit::Hearts),
    ///     Card::new(Rank::Ace, Suit::Spades),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert_eq!(hand.value(), 12);
    /// ```
    #[must_use]
    pub fn value(&self) -> u16 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is exactly two cards worth 21.
    #[must_use]
    pub fn is_natural_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// The dealer's hand.
///
/// The first card dealt to the dealer is the hole card. It stays face down
/// until [`DealerHand::reveal_hole`] is called, and the public accessors
/// leave it out until then.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    hand: Hand,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the cards a player can see.
    ///
    /// While the hole card is hidden this skips the first card.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        let cards = self.hand.cards();
        if self.hole_revealed || cards.is_empty() {
            cards
        } else {
            &cards[1..]
        }
    }

    /// Returns the hole card once it has been revealed.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        if self.hole_revealed {
            self.hand.cards().first()
        } else {
            None
        }
    }

    /// Calculates the value of the visible cards only.
    #[must_use]
    pub fn visible_value(&self) -> u16 {
        evaluate_cards(self.visible_cards()).0
    }

    /// Calculates the full value, or `None` while the hole card is hidden.
    #[must_use]
    pub fn value(&self) -> Option<u16> {
        self.hole_revealed.then(|| self.hand.value())
    }

    /// Returns the number of cards, face-down card included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Full hand, hole card included, for the round's own scoring.
    pub(crate) const fn hand(&self) -> &Hand {
        &self.hand
    }
}
