use crate::error::AdvanceError;

use super::{Game, Phase, Round};

impl Game {
    /// Advances past an answered round.
    ///
    /// If the deck is empty the game finishes and both cards stay visible.
    /// Otherwise the drawn card becomes the current card and a new round
    /// begins.
    ///
    /// Returns the phase after advancing: [`Phase::Guessing`] or
    /// [`Phase::Finished`].
    ///
    /// # Errors
    ///
    /// Returns [`AdvanceError::InvalidState`] if the round has not been
    /// answered or the game is already over.
    pub fn advance(&mut self) -> Result<Phase, AdvanceError> {
        if self.finished || !self.round.answered {
            log::warn!("advance rejected in phase {:?}", self.phase());
            return Err(AdvanceError::InvalidState);
        }

        if self.deck.is_empty() {
            self.finished = true;
            log::info!(
                "game finished: {} wins, {} losses",
                self.score.wins,
                self.score.losses
            );
            return Ok(Phase::Finished);
        }

        let Some(next) = self.round.pending else {
            return Err(AdvanceError::InvalidState);
        };
        self.round = Round::new(next);

        Ok(Phase::Guessing)
    }
}
