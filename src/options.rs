//! Game configuration options.

use core::time::Duration;

/// Configuration options for a card battle game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use cardbattle::GameOptions;
///
/// let options = GameOptions::default()
///     .with_reveal_delay(Duration::from_millis(250))
///     .with_clear_history_on_restart(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Pause between revealing the player's card and the computer's draw.
    pub reveal_delay: Duration,
    /// Pause between the computer's draw and the outcome.
    pub compare_delay: Duration,
    /// Whether [`Game::restart`](crate::Game::restart) also clears history.
    pub clear_history_on_restart: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(500),
            compare_delay: Duration::from_millis(100),
            clear_history_on_restart: false,
        }
    }
}

impl GameOptions {
    /// Options with both delays set to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use cardbattle::GameOptions;
    ///
    /// let options = GameOptions::instant();
    /// assert_eq!(options.reveal_delay, Duration::ZERO);
    /// assert_eq!(options.compare_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            reveal_delay: Duration::ZERO,
            compare_delay: Duration::ZERO,
            clear_history_on_restart: false,
        }
    }

    /// Sets the reveal delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use cardbattle::GameOptions;
    ///
    /// let options = GameOptions::default().with_reveal_delay(Duration::from_millis(800));
    /// assert_eq!(options.reveal_delay, Duration::from_millis(800));
    /// ```
    #[must_use]
    pub const fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Sets the compare delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use cardbattle::GameOptions;
    ///
    /// let options = GameOptions::default().with_compare_delay(Duration::ZERO);
    /// assert_eq!(options.compare_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_compare_delay(mut self, delay: Duration) -> Self {
        self.compare_delay = delay;
        self
    }

    /// Sets whether restarting the game also clears the round history.
    ///
    /// # Example
    ///
    /// ```
    /// use cardbattle::GameOptions;
    ///
    /// let options = GameOptions::default().with_clear_history_on_restart(true);
    /// assert!(options.clear_history_on_restart);
    /// ```
    #[must_use]
    pub const fn with_clear_history_on_restart(mut self, clear: bool) -> Self {
        self.clear_history_on_restart = clear;
        self
    }
}
