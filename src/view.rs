//! What a renderer shows for the current game state.

use core::fmt;

use crate::card::Card;
use crate::game::{Game, Phase};

/// Status message shown under the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Waiting for a guess.
    Prompt,
    /// The last guess was correct.
    Win,
    /// The last guess was incorrect.
    Lose,
    /// The game is over.
    Finished {
        /// Final number of correct guesses.
        wins: u32,
        /// Final number of incorrect guesses.
        losses: u32,
    },
}

impl Message {
    /// Returns the first line of the message.
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::Prompt => "High and Low?",
            Self::Win => "Win!",
            Self::Lose => "Lose!",
            Self::Finished { .. } => "Thank you for playing!",
        }
    }
}

impl fmt::Display for Message {
    /// Writes the message, one line per entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())?;
        if let Self::Finished { wins, losses } = self {
            write!(f, "\nWin: {wins} Lose: {losses}")?;
        }
        Ok(())
    }
}

/// Controls shown under the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controls {
    /// The "HIGH" and "LOW" buttons.
    Guess,
    /// The button that advances to the next round.
    Progress {
        /// Whether the deck is empty, so advancing ends the game.
        last_round: bool,
    },
    /// No controls; the game is over.
    Hidden,
}

impl Controls {
    /// Returns the button labels, in display order.
    #[must_use]
    pub const fn labels(&self) -> &'static [&'static str] {
        match self {
            Self::Guess => &["HIGH", "LOW"],
            Self::Progress { last_round: false } => &["NEXT"],
            Self::Progress { last_round: true } => &["FINISH"],
            Self::Hidden => &[],
        }
    }
}

/// Snapshot of everything a renderer needs to draw the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    /// The card the guess is made against.
    pub current: Card,
    /// The card drawn by the guess, face down when `None`.
    pub pending: Option<Card>,
    /// Status message.
    pub message: Message,
    /// Controls to show.
    pub controls: Controls,
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// Correct guesses so far.
    pub wins: u32,
    /// Incorrect guesses so far.
    pub losses: u32,
}

impl Game {
    /// Returns the view of the current state.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{Controls, Game, GameOptions, Message};
    ///
    /// let game = Game::new(GameOptions::default(), 7);
    /// let view = game.view();
    /// assert_eq!(view.message, Message::Prompt);
    /// assert_eq!(view.controls, Controls::Guess);
    /// ```
    #[must_use]
    pub fn view(&self) -> View {
        let score = self.score();
        let (message, controls) = match self.phase() {
            Phase::Guessing => (Message::Prompt, Controls::Guess),
            Phase::Answered => {
                let message = if self.last_guess_correct() == Some(true) {
                    Message::Win
                } else {
                    Message::Lose
                };
                let controls = Controls::Progress {
                    last_round: self.is_deck_empty(),
                };
                (message, controls)
            }
            Phase::Finished => (
                Message::Finished {
                    wins: score.wins,
                    losses: score.losses,
                },
                Controls::Hidden,
            ),
        };

        View {
            current: self.current_card(),
            pending: self.pending_card(),
            message,
            controls,
            cards_remaining: self.cards_remaining(),
            wins: score.wins,
            losses: score.losses,
        }
    }
}
