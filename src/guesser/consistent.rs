//! First-consistent-code guessing
//!
//! Keeps the (guess, feedback) history of the current game and always plays
//! the first code, in code-space order, that would have produced every
//! feedback seen so far. The secret is always consistent, and every wrong
//! guess rules itself out, so this never needs more turns than there are
//! codes.

use super::Guesser;
use crate::core::{Code, CodeSpace, Feedback, GameConfig, MastermindError, Result};

/// Plays the lowest code still consistent with the feedback history
#[derive(Debug, Default, Clone)]
pub struct ConsistentGuesser {
    history: Vec<(Code, Feedback)>,
    last_guess: Option<Code>,
}

impl ConsistentGuesser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Guesses and feedback recorded so far in this game
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// Check whether `candidate` as secret reproduces every observed feedback
    fn is_consistent(&self, candidate: &Code, config: &GameConfig) -> bool {
        self.history.iter().all(|(guess, observed)| {
            Feedback::calculate(config, candidate, guess).is_ok_and(|fb| fb == *observed)
        })
    }

    /// Count codes that are still possible secrets
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the code space cannot be enumerated.
    pub fn count_candidates(&self, config: &GameConfig) -> Result<usize> {
        let space = CodeSpace::new(*config)?;
        Ok(space
            .iter()
            .filter(|candidate| self.is_consistent(candidate, config))
            .count())
    }
}

impl Guesser for ConsistentGuesser {
    fn next_guess(
        &mut self,
        turn: usize,
        last_feedback: Option<Feedback>,
        config: &GameConfig,
    ) -> Result<Code> {
        if turn <= 1 {
            self.history.clear();
            self.last_guess = None;
        }

        if let (Some(guess), Some(feedback)) = (self.last_guess.take(), last_feedback) {
            self.history.push((guess, feedback));
        }

        let space = CodeSpace::new(*config)?;
        let guess = space
            .iter()
            .find(|candidate| self.is_consistent(candidate, config))
            .ok_or_else(|| {
                MastermindError::GuesserFailed(
                    "no code is consistent with the feedback received".to_string(),
                )
            })?;

        self.last_guess = Some(guess.clone());
        Ok(guess)
    }
}
