//! Random guessing
//!
//! Draws every peg independently and uniformly. Ignores feedback entirely,
//! which makes it the floor any real strategy should beat.

use super::Guesser;
use crate::core::{Code, Feedback, GameConfig, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniformly random guesses from an explicit RNG
pub struct RandomGuesser {
    rng: StdRng,
}

impl RandomGuesser {
    #[must_use]
    pub const fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Reproducible guesser for tests and seeded runs
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl Guesser for RandomGuesser {
    fn next_guess(
        &mut self,
        _turn: usize,
        _last_feedback: Option<Feedback>,
        config: &GameConfig,
    ) -> Result<Code> {
        let pegs: Vec<u8> = (0..config.positions())
            .map(|_| self.rng.random_range(0..config.colors()))
            .collect();
        Ok(Code::new(pegs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_fit_the_board() {
        let config = GameConfig::new(5, 8).unwrap();
        let mut guesser = RandomGuesser::seeded(3);

        for turn in 1..=50 {
            let guess = guesser.next_guess(turn, None, &config).unwrap();
            assert!(config.validate(&guess).is_ok());
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let config = GameConfig::CLASSIC;
        let mut a = RandomGuesser::seeded(42);
        let mut b = RandomGuesser::seeded(42);

        let first: Vec<Code> = (1..=10)
            .map(|t| a.next_guess(t, None, &config).unwrap())
            .collect();
        let second: Vec<Code> = (1..=10)
            .map(|t| b.next_guess(t, None, &config).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn single_color_board_always_zero() {
        let config = GameConfig::new(3, 1).unwrap();
        let mut guesser = RandomGuesser::seeded(0);
        assert_eq!(
            guesser.next_guess(1, None, &config).unwrap(),
            Code::new([0, 0, 0])
        );
    }
}
