//! Round configuration options.

/// Configuration options for a blackjack round.
///
/// The defaults give the classic table: blackjack pays 3:2 and the dealer
/// stands on 17.
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_blackjack_pays(1.2)
///     .with_dealer_stands_on(18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOptions {
    /// Blackjack payout ratio applied to the bid (typically 1.5).
    ///
    /// Fractional payouts are truncated toward zero.
    pub blackjack_pays: f64,
    /// The dealer keeps drawing while the hand is below this value.
    pub dealer_stands_on: u16,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            blackjack_pays: 1.5,
            dealer_stands_on: 17,
        }
    }
}

impl GameOptions {
    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the value the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u16) -> Self {
        self.dealer_stands_on = value;
        self
    }
}
