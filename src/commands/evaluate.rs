//! Evaluate command
//!
//! Scores a single guess against a given secret.

use crate::core::{Code, Feedback, GameConfig, Result};

/// Result of scoring one guess
pub struct EvaluationResult {
    pub config: GameConfig,
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

impl EvaluationResult {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.feedback.is_win(self.config.positions())
    }
}

/// Parse `secret` and `guess` and score them on `config`
///
/// # Errors
///
/// Returns `InvalidCode` if either string is not a list of color indices or
/// does not fit the board.
pub fn evaluate_guess(config: GameConfig, secret: &str, guess: &str) -> Result<EvaluationResult> {
    let secret: Code = secret.parse()?;
    let guess: Code = guess.parse()?;
    let feedback = Feedback::calculate(&config, &secret, &guess)?;

    Ok(EvaluationResult {
        config,
        secret,
        guess,
        feedback,
    })
}
