//! Simple line-mode game
//!
//! Plays one visualized game: a secret (given or drawn at random) against any
//! guesser, printing every turn through a visualizer.

use crate::core::{Code, CodeSpace, GameConfig, Result};
use crate::game::{CLASSIC_MAX_TURNS, Game, Outcome};
use crate::guesser::Guesser;
use crate::output::Visualizer;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a single visualized game
pub struct SimpleConfig {
    pub game: GameConfig,
    pub max_turns: usize,
    /// Secret to play against; drawn at random when `None`
    pub secret: Option<Code>,
    /// Seed for the random secret
    pub seed: Option<u64>,
}

impl SimpleConfig {
    #[must_use]
    pub const fn new(game: GameConfig) -> Self {
        Self {
            game,
            max_turns: CLASSIC_MAX_TURNS,
            secret: None,
            seed: None,
        }
    }

    /// The secret for this game, drawing one if none was given
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the code space cannot be sampled.
    pub fn choose_secret(&self) -> Result<Code> {
        if let Some(secret) = &self.secret {
            return Ok(secret.clone());
        }
        let space = CodeSpace::new(self.game)?;
        let mut rng = self
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Ok(space.sample(&mut rng))
    }
}

/// Play one game with visualization
///
/// # Errors
///
/// Returns an error if the secret is invalid, the guesser fails or produces a
/// malformed guess, or the visualizer cannot write.
pub fn run_simple<G, V>(config: &SimpleConfig, guesser: &mut G, visualizer: &mut V) -> Result<Outcome>
where
    G: Guesser + ?Sized,
    V: Visualizer + ?Sized,
{
    let game = Game::new(config.choose_secret()?, config.game)?;
    let outcome = game.play_with_visualizer(guesser, visualizer, config.max_turns)?;
    info!(
        "{} in {} turns",
        if outcome.won { "won" } else { "lost" },
        outcome.turns
    );
    Ok(outcome)
}
