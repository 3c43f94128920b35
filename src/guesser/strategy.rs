//! Guessing strategies
//!
//! Defines the Guesser trait and the runtime-selectable strategy wrapper.

use super::{ConsistentGuesser, FixedGuesser, RandomGuesser};
use crate::core::{Code, Feedback, GameConfig, Result};

/// Anything that can propose the next guess in a game
///
/// A guesser only ever sees the turn number, the feedback for its previous
/// guess (`None` on turn 1) and the board shape. It may keep memory between
/// calls within one game; the benchmark builds a fresh guesser per secret.
pub trait Guesser {
    /// Produce the guess for `turn` (1-indexed)
    ///
    /// # Errors
    /// Returns an error if the guesser cannot produce a guess at all.
    fn next_guess(
        &mut self,
        turn: usize,
        last_feedback: Option<Feedback>,
        config: &GameConfig,
    ) -> Result<Code>;
}

impl<G: Guesser + ?Sized> Guesser for &mut G {
    fn next_guess(
        &mut self,
        turn: usize,
        last_feedback: Option<Feedback>,
        config: &GameConfig,
    ) -> Result<Code> {
        (**self).next_guess(turn, last_feedback, config)
    }
}

impl<G: Guesser + ?Sized> Guesser for Box<G> {
    fn next_guess(
        &mut self,
        turn: usize,
        last_feedback: Option<Feedback>,
        config: &GameConfig,
    ) -> Result<Code> {
        (**self).next_guess(turn, last_feedback, config)
    }
}

/// Names of the built-in strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// First code consistent with all feedback so far (default)
    Consistent,
    /// Uniformly random code every turn
    Random,
}

impl StrategyKind {
    /// Create strategy kind from name string
    ///
    /// Supported names: "consistent", "random".
    /// Defaults to consistent if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random,
            _ => Self::Consistent,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Consistent => "consistent",
            Self::Random => "random",
        }
    }

    /// Build a fresh strategy instance
    ///
    /// `seed` only affects randomised strategies; without it they draw from
    /// the operating system.
    #[must_use]
    pub fn build(self, seed: Option<u64>) -> Strategy {
        match self {
            Self::Consistent => Strategy::Consistent(ConsistentGuesser::new()),
            Self::Random => Strategy::Random(
                seed.map_or_else(RandomGuesser::from_os_rng, RandomGuesser::seeded),
            ),
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum Strategy {
    Consistent(ConsistentGuesser),
    Random(RandomGuesser),
    Fixed(FixedGuesser),
}

impl Guesser for Strategy {
    fn next_guess(
        &mut self,
        turn: usize,
        last_feedback: Option<Feedback>,
        config: &GameConfig,
    ) -> Result<Code> {
        match self {
            Self::Consistent(g) => g.next_guess(turn, last_feedback, config),
            Self::Random(g) => g.next_guess(turn, last_feedback, config),
            Self::Fixed(g) => g.next_guess(turn, last_feedback, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_defaults_to_consistent() {
        assert_eq!(StrategyKind::from_name("random"), StrategyKind::Random);
        assert_eq!(
            StrategyKind::from_name("consistent"),
            StrategyKind::Consistent
        );
        assert_eq!(StrategyKind::from_name("minimax"), StrategyKind::Consistent);
    }

    #[test]
    fn name_round_trips() {
        for kind in [StrategyKind::Consistent, StrategyKind::Random] {
            assert_eq!(StrategyKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn seeded_random_strategy_is_reproducible() {
        let config = GameConfig::CLASSIC;
        let mut a = StrategyKind::Random.build(Some(11));
        let mut b = StrategyKind::Random.build(Some(11));

        for turn in 1..=5 {
            assert_eq!(
                a.next_guess(turn, None, &config).unwrap(),
                b.next_guess(turn, None, &config).unwrap()
            );
        }
    }

    #[test]
    fn boxed_guesser_delegates() {
        let config = GameConfig::CLASSIC;
        let mut boxed: Box<dyn Guesser> =
            Box::new(Strategy::Fixed(FixedGuesser::new(Code::new([1, 1, 1, 1]))));
        assert_eq!(
            boxed.next_guess(1, None, &config).unwrap(),
            Code::new([1, 1, 1, 1])
        );
    }
}
