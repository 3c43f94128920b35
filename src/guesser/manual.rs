//! Guesses typed by a person
//!
//! Reads one line per turn from any buffered reader (normally stdin) and
//! writes a prompt to any writer. Range checks are left to the evaluator, so
//! an out-of-range color surfaces as `InvalidCode` exactly as it would for a
//! broken strategy.

use super::Guesser;
use crate::core::{Code, Feedback, GameConfig, MastermindError, Result};
use std::io::{self, BufRead, Write};

/// Line-oriented human guesser
pub struct ManualGuesser<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> ManualGuesser<R, W> {
    pub const fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl ManualGuesser<io::StdinLock<'static>, io::Stdout> {
    /// Guesser bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Guesser for ManualGuesser<R, W> {
    fn next_guess(
        &mut self,
        turn: usize,
        _last_feedback: Option<Feedback>,
        config: &GameConfig,
    ) -> Result<Code> {
        write!(
            self.prompt,
            "Guess {turn}: enter {} colors (0-{}) separated by spaces: ",
            config.positions(),
            config.colors() - 1
        )?;
        self.prompt.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MastermindError::GuesserFailed(
                "input closed before a guess was entered".to_string(),
            ));
        }

        line.trim().parse()
    }
}
