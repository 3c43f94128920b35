//! A guesser that repeats one code forever

use super::Guesser;
use crate::core::{Code, Feedback, GameConfig, Result};

/// Always proposes the same code
///
/// Useful for deterministic benchmarks and for exercising the turn limit.
#[derive(Debug, Clone)]
pub struct FixedGuesser {
    code: Code,
}

impl FixedGuesser {
    #[must_use]
    pub const fn new(code: Code) -> Self {
        Self { code }
    }
}

impl Guesser for FixedGuesser {
    fn next_guess(
        &mut self,
        _turn: usize,
        _last_feedback: Option<Feedback>,
        _config: &GameConfig,
    ) -> Result<Code> {
        Ok(self.code.clone())
    }
}
