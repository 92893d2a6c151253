//! Game configuration options.

/// Configuration options for a Truco table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use truco::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(3)
///     .with_winning_score(24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Cards dealt to each player per round.
    pub hand_size: usize,
    /// Tricks a player needs to win a round.
    pub tricks_to_win: u8,
    /// Round score that ends the game.
    pub winning_score: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 3,
            tricks_to_win: 2,
            winning_score: 12,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets how many tricks win a round.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::GameOptions;
    ///
    /// let options = GameOptions::default().with_tricks_to_win(3);
    /// assert_eq!(options.tricks_to_win, 3);
    /// ```
    #[must_use]
    pub const fn with_tricks_to_win(mut self, tricks: u8) -> Self {
        self.tricks_to_win = tricks;
        self
    }

    /// Sets the score that wins the game.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(24);
    /// assert_eq!(options.winning_score, 24);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: u8) -> Self {
        self.winning_score = score;
        self
    }

    /// Returns whether a hand of this size can always decide a round.
    #[must_use]
    pub const fn hand_is_decisive(&self) -> bool {
        self.tricks_to_win > 0 && self.hand_size >= 2 * self.tricks_to_win as usize - 1
    }
}
