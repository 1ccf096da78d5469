//! Game state types.

use crate::card::Card;

/// Phase of the game, derived from the round and finished flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a "higher" or "lower" guess.
    Guessing,
    /// The guess is resolved and the game waits for an advance.
    Answered,
    /// The deck is exhausted and the last guess has been resolved.
    Finished,
}

/// Direction of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The next card is higher than the current one.
    Higher,
    /// The next card is lower than the current one.
    Lower,
}

/// The two visible cards and the guess state of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// The card the player guesses against.
    pub current: Card,
    /// The card drawn by the guess, if any.
    pub pending: Option<Card>,
    /// Whether the last guess was correct, once answered.
    pub last_guess_correct: Option<bool>,
    /// Whether the guess of this round has been resolved.
    pub answered: bool,
}

impl Round {
    pub(crate) const fn new(current: Card) -> Self {
        Self {
            current,
            pending: None,
            last_guess_correct: None,
            answered: false,
        }
    }
}

/// Running win/lose tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Number of correct guesses.
    pub wins: u32,
    /// Number of incorrect guesses.
    pub losses: u32,
}

impl Score {
    /// Returns the number of rounds resolved so far.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses
    }

    pub(crate) const fn record(&mut self, correct: bool) {
        if correct {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }
}
