//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The round is already answered or the game is over.
    #[error("invalid game state for guessing")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DrawError> for GuessError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur when advancing to the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// The round has not been answered yet or the game is over.
    #[error("invalid game state for advancing")]
    InvalidState,
}

/// Errors that can occur when building a game from a custom deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Fewer than two cards were supplied, so no round can be played.
    #[error("deck needs at least two cards, got {len}")]
    TooFewCards {
        /// Number of cards supplied.
        len: usize,
    },
    /// A card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when parsing a card or rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card")]
    Empty,
    /// The rank symbol is not recognized.
    #[error("unknown rank")]
    UnknownRank,
    /// The suit symbol is not recognized.
    #[error("unknown suit")]
    UnknownSuit,
}
