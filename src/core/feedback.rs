//! Feedback calculation and representation
//!
//! Feedback is the pair of black and white peg counts:
//! - black = pegs with the right color in the right position
//! - white = further pegs with a right color in the wrong position
//!
//! Repeated colors are capped: each color contributes at most
//! `min(count in secret, count in guess)` matches across black and white.

use super::{Code, GameConfig, Result};
use std::fmt;

/// Black/white peg score for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    black: usize,
    white: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    #[inline]
    #[must_use]
    pub const fn black(self) -> usize {
        self.black
    }

    #[inline]
    #[must_use]
    pub const fn white(self) -> usize {
        self.white
    }

    /// Total color overlap, ignoring position
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.black + self.white
    }

    /// Check if every position matched
    #[inline]
    #[must_use]
    pub const fn is_win(self, positions: usize) -> bool {
        self.black == positions
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. black = number of positions where secret and guess agree
    /// 2. overlap = sum over colors of `min(count in secret, count in guess)`
    /// 3. white = overlap - black
    ///
    /// # Errors
    /// Returns `InvalidCode` if either code does not fit `config`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback, GameConfig};
    ///
    /// let config = GameConfig::CLASSIC;
    /// let secret = Code::new([1, 2, 1, 3]);
    /// let guess = Code::new([1, 1, 2, 2]);
    ///
    /// let feedback = Feedback::calculate(&config, &secret, &guess).unwrap();
    /// assert_eq!(feedback, Feedback::new(1, 2));
    /// ```
    pub fn calculate(config: &GameConfig, secret: &Code, guess: &Code) -> Result<Self> {
        config.validate(secret)?;
        config.validate(guess)?;

        let black = secret
            .pegs()
            .iter()
            .zip(guess.pegs())
            .filter(|(s, g)| s == g)
            .count();

        let overlap: usize = secret
            .color_counts(config.colors())
            .into_iter()
            .zip(guess.color_counts(config.colors()))
            .map(|(in_secret, in_guess)| in_secret.min(in_guess))
            .sum();

        Ok(Self {
            black,
            white: overlap - black,
        })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Black: {}, White: {})", self.black, self.white)
    }
}
