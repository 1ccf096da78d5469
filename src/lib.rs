//! A High and Low card guessing game engine with optional `no_std` support.
//!
//! A 52-card deck is built and one card is drawn face up. The player guesses
//! whether the next card's rank is higher or lower; the card is drawn, the
//! guess is scored and the drawn card becomes the next one to guess against,
//! until the deck runs out.
//!
//! The crate provides a [`Game`] type that owns the state and its
//! transitions, a [`View`] snapshot for renderers and an [`InputAdapter`]
//! for keyboard front ends.
//!
//! # Example
//!
//! ```
//! use hilo::{Direction, Game, GameOptions, Phase};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let outcome = game.guess(Direction::Higher).unwrap();
//! assert_eq!(game.score().rounds(), 1);
//! assert_eq!(game.pending_card(), Some(outcome.drawn));
//! assert_eq!(game.advance(), Ok(Phase::Guessing));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod input;
pub mod options;
pub mod result;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{AdvanceError, DeckError, DrawError, GuessError, ParseCardError};
pub use game::{Direction, Game, Phase, Round, Score};
pub use input::{GuessKeys, InputAdapter};
pub use options::{GameOptions, Keymap, TieRule};
pub use result::GuessOutcome;
pub use view::{Controls, Message, View};
