//! Guess result types.

use crate::card::Card;
use crate::game::Direction;

/// Result of a single resolved guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The direction that was guessed.
    pub direction: Direction,
    /// The card the guess was made against.
    pub current: Card,
    /// The card drawn to resolve the guess.
    pub drawn: Card,
    /// Whether the guess was correct.
    pub correct: bool,
}
