use crate::error::GuessError;
use crate::options::TieRule;
use crate::result::GuessOutcome;

use super::{Direction, Game};

/// Returns whether a guess is correct for the given rank values.
const fn resolve(direction: Direction, tie_rule: TieRule, current: u8, drawn: u8) -> bool {
    if current == drawn {
        return match (direction, tie_rule) {
            (Direction::Lower, TieRule::LowerWins) | (Direction::Higher, TieRule::HigherWins) => {
                true
            }
            _ => false,
        };
    }

    match direction {
        Direction::Higher => drawn > current,
        Direction::Lower => drawn < current,
    }
}

impl Game {
    /// Guesses whether the next card is higher or lower than the current one.
    ///
    /// Draws a card, compares rank values and records a win or a loss. With
    /// the default [`TieRule::LowerWins`], "higher" needs a strictly higher
    /// rank and "lower" is correct for a lower or equal rank.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::InvalidState`] if the round is already answered
    /// or the game is over, and [`GuessError::EmptyDeck`] if no card can be
    /// drawn. The state is unchanged on error.
    pub fn guess(&mut self, direction: Direction) -> Result<GuessOutcome, GuessError> {
        if self.finished || self.round.answered {
            log::warn!("guess {direction:?} rejected in phase {:?}", self.phase());
            return Err(GuessError::InvalidState);
        }

        let drawn = self.deck.draw(&mut self.rng)?;
        let current = self.round.current;
        let correct = resolve(
            direction,
            self.options.tie_rule,
            current.value(),
            drawn.value(),
        );

        self.round.pending = Some(drawn);
        self.round.last_guess_correct = Some(correct);
        self.round.answered = true;
        self.score.record(correct);

        log::debug!(
            "guess {direction:?}: {current} -> {drawn} ({}), score {}-{}",
            if correct { "win" } else { "lose" },
            self.score.wins,
            self.score.losses
        );

        Ok(GuessOutcome {
            direction,
            current,
            drawn,
            correct,
        })
    }
}

