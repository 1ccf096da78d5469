//! Game configuration options.

/// How a tie between the current and the drawn card is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TieRule {
    /// A tie counts as a correct "lower" guess and an incorrect "higher" guess.
    #[default]
    LowerWins,
    /// A tie counts as a correct "higher" guess and an incorrect "lower" guess.
    HigherWins,
    /// A tie is an incorrect guess in either direction.
    BothLose,
}

/// Keys that trigger a guess while the guess controls are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keymap {
    /// Key for a "higher" guess.
    pub higher: char,
    /// Key for a "lower" guess.
    pub lower: char,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            higher: 'h',
            lower: 'l',
        }
    }
}

/// Configuration options for a High and Low game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hilo::{GameOptions, Keymap, TieRule};
///
/// let options = GameOptions::default()
///     .with_tie_rule(TieRule::BothLose)
///     .with_keymap(Keymap { higher: 'k', lower: 'j' });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// How ties are resolved.
    pub tie_rule: TieRule,
    /// Keyboard bindings for the guess controls.
    pub keymap: Keymap,
}

impl GameOptions {
    /// Sets how ties are resolved.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{GameOptions, TieRule};
    ///
    /// let options = GameOptions::default().with_tie_rule(TieRule::HigherWins);
    /// assert_eq!(options.tie_rule, TieRule::HigherWins);
    /// ```
    #[must_use]
    pub const fn with_tie_rule(mut self, tie_rule: TieRule) -> Self {
        self.tie_rule = tie_rule;
        self
    }

    /// Sets the keyboard bindings for the guess controls.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{GameOptions, Keymap};
    ///
    /// let keymap = Keymap { higher: 'u', lower: 'd' };
    /// let options = GameOptions::default().with_keymap(keymap);
    /// assert_eq!(options.keymap.higher, 'u');
    /// ```
    #[must_use]
    pub const fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }
}
