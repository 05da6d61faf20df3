//! Session configuration options.

/// Configuration options for a blackjack session.
///
/// House rules are fixed; options only affect presentation.
///
/// ```
/// use bjplay::GameOptions;
///
/// let options = GameOptions::default().with_clear_screen(false);
/// assert!(!options.clear_screen);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether the screen is cleared before each table is drawn.
    pub clear_screen: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

impl GameOptions {
    /// Sets whether the screen is cleared before each table is drawn.
    ///
    /// # Example
    ///
    /// ```
    /// use bjplay::GameOptions;
    ///
    /// let options = GameOptions::default().with_clear_screen(false);
    /// assert_eq!(options.clear_screen, false);
    /// ```
    #[must_use]
    pub const fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }
}
