//! Game engine and state management.

extern crate alloc;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::options::GameOptions;

mod advance;
mod guess;
pub mod state;

pub use state::{Direction, Phase, Round, Score};

/// A High and Low game engine.
///
/// The game owns the deck, the two visible cards, the score and the random
/// number generator. It is mutated only through [`Game::guess`],
/// [`Game::advance`] and [`Game::reset`]; every rejected call leaves the
/// state untouched.
#[derive(Debug, Clone)]
pub struct Game {
    /// Undrawn cards.
    deck: Deck,
    /// Current round.
    round: Round,
    /// Win/lose tally.
    score: Score,
    /// Whether the deck is exhausted and the last guess resolved.
    finished: bool,
    /// Game options.
    options: GameOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a full deck and the given seed.
    ///
    /// One card is drawn at random as the first current card.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), 51);
    /// ```
    #[must_use]
    #[expect(clippy::missing_panics_doc, reason = "a full deck always has a first card")]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let game = Self::start(options, Deck::full(), seed)
            .expect("a full deck always has a first card");
        log::debug!("new game (seed {seed}), first card {}", game.round.current);
        game
    }

    /// Creates a new game from a custom deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TooFewCards`] if fewer than two cards are given and
    /// [`DeckError::DuplicateCard`] if a card appears more than once.
    pub fn with_deck(
        options: GameOptions,
        cards: Vec<Card>,
        seed: u64,
    ) -> Result<Self, DeckError> {
        let len = cards.len();
        if len < 2 {
            return Err(DeckError::TooFewCards { len });
        }

        let game = Self::start(options, Deck::from_cards(cards)?, seed)
            .ok_or(DeckError::TooFewCards { len })?;
        log::debug!(
            "new game from custom deck (seed {seed}, {len} cards), first card {}",
            game.round.current
        );
        Ok(game)
    }

    /// Draws the first current card and builds the initial state.
    fn start(options: GameOptions, mut deck: Deck, seed: u64) -> Option<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let current = deck.draw(&mut rng).ok()?;

        Some(Self {
            deck,
            round: Round::new(current),
            score: Score::default(),
            finished: false,
            options,
            rng,
        })
    }

    /// Restarts the session with a fresh full deck and a new seed.
    ///
    /// The score is cleared; options are kept.
    pub fn reset(&mut self, seed: u64) {
        log::debug!(
            "resetting game after {} rounds ({} wins, {} losses)",
            self.score.rounds(),
            self.score.wins,
            self.score.losses
        );
        *self = Self::new(self.options, seed);
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.round.answered {
            Phase::Answered
        } else {
            Phase::Guessing
        }
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the card the next guess is made against.
    #[must_use]
    pub const fn current_card(&self) -> Card {
        self.round.current
    }

    /// Returns the card drawn by the last guess, if the round is answered.
    #[must_use]
    pub const fn pending_card(&self) -> Option<Card> {
        self.round.pending
    }

    /// Returns whether the last guess was correct.
    ///
    /// Returns `None` while the current round is unanswered.
    #[must_use]
    pub const fn last_guess_correct(&self) -> Option<bool> {
        self.round.last_guess_correct
    }

    /// Returns whether the current round's guess has been resolved.
    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.round.answered
    }

    /// Returns whether the game is over.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the number of correct guesses.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.score.wins
    }

    /// Returns the number of incorrect guesses.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.score.losses
    }

    /// Returns the undrawn cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the deck is empty.
    ///
    /// Once the current round is answered this means it is the last round.
    #[must_use]
    pub fn is_deck_empty(&self) -> bool {
        self.deck.is_empty()
    }
}
