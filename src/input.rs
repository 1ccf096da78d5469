//! Keyboard input for the guess controls.
//!
//! Guess keys are only live while a [`GuessKeys`] guard exists. A front end
//! binds them when it shows the "HIGH"/"LOW" controls and drops the guard
//! when the controls go away, so a stray key press can never guess into an
//! answered or finished round.
//!
//! ```
//! use hilo::{Direction, Game, GameOptions, InputAdapter};
//!
//! let mut game = Game::new(GameOptions::default(), 1);
//! let mut input = InputAdapter::new(game.options().keymap);
//!
//! {
//!     let keys = input.bind_guess_keys();
//!     assert_eq!(keys.direction_for('h'), Some(Direction::Higher));
//!     assert!(keys.handle(&mut game, 'h').is_some());
//! }
//!
//! assert_eq!(input.direction_for('h'), None);
//! ```

use crate::error::GuessError;
use crate::game::{Direction, Game};
use crate::options::Keymap;
use crate::result::GuessOutcome;

/// Maps keys to guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputAdapter {
    keymap: Keymap,
    guess_keys_bound: bool,
}

impl InputAdapter {
    /// Creates an adapter with no keys bound.
    #[must_use]
    pub const fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            guess_keys_bound: false,
        }
    }

    /// Returns the key map.
    #[must_use]
    pub const fn keymap(&self) -> Keymap {
        self.keymap
    }

    /// Returns whether the guess keys are currently bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.guess_keys_bound
    }

    /// Returns the guess direction for a key.
    ///
    /// Always `None` while no [`GuessKeys`] guard is alive.
    #[must_use]
    pub const fn direction_for(&self, key: char) -> Option<Direction> {
        if !self.guess_keys_bound {
            return None;
        }

        if key == self.keymap.higher {
            Some(Direction::Higher)
        } else if key == self.keymap.lower {
            Some(Direction::Lower)
        } else {
            None
        }
    }

    /// Binds the guess keys until the returned guard is dropped.
    #[must_use = "the guess keys are unbound as soon as the guard is dropped"]
    pub fn bind_guess_keys(&mut self) -> GuessKeys<'_> {
        log::trace!(
            "binding guess keys '{}'/'{}'",
            self.keymap.higher,
            self.keymap.lower
        );
        self.guess_keys_bound = true;
        GuessKeys { adapter: self }
    }
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new(Keymap::default())
    }
}

/// Scope in which the guess keys are bound.
///
/// Dropping the guard unbinds the keys.
#[derive(Debug)]
pub struct GuessKeys<'a> {
    adapter: &'a mut InputAdapter,
}

impl GuessKeys<'_> {
    /// Returns the guess direction for a key.
    #[must_use]
    pub const fn direction_for(&self, key: char) -> Option<Direction> {
        self.adapter.direction_for(key)
    }

    /// Forwards a key press to [`Game::guess`].
    ///
    /// Returns `None` if the key is not bound to a guess.
    pub fn handle(
        &self,
        game: &mut Game,
        key: char,
    ) -> Option<Result<GuessOutcome, GuessError>> {
        self.direction_for(key).map(|direction| game.guess(direction))
    }
}

impl Drop for GuessKeys<'_> {
    fn drop(&mut self) {
        log::trace!("unbinding guess keys");
        self.adapter.guess_keys_bound = false;
    }
}
