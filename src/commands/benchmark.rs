//! Benchmark command
//!
//! Plays one game per code in the code space, each with a freshly built
//! guesser, on a rayon worker pool, and aggregates the turn counts.

use crate::core::{Code, CodeSpace, GameConfig, MastermindError, Result};
use crate::game::Game;
use crate::guesser::Guesser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Settings for a benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub game: GameConfig,
    /// Safety ceiling on turns per game; a game that hits it counts as this many turns
    pub max_turns: usize,
    /// Games needing more turns than this count as losses
    pub loss_threshold: usize,
    /// Worker threads; 0 uses every available core
    pub threads: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    pub const DEFAULT_MAX_TURNS: usize = 1000;
    pub const DEFAULT_LOSS_THRESHOLD: usize = 6;

    #[must_use]
    pub const fn new(game: GameConfig) -> Self {
        Self {
            game,
            max_turns: Self::DEFAULT_MAX_TURNS,
            loss_threshold: Self::DEFAULT_LOSS_THRESHOLD,
            threads: 0,
            show_progress: false,
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new(GameConfig::CLASSIC)
    }
}

/// Result of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: Code,
    pub turns: usize,
    pub won: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// One record per code, in code-space order
    pub records: Vec<GameRecord>,
    pub total_games: usize,
    pub mean_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Games with more turns than `loss_threshold`
    pub losses: usize,
    pub loss_threshold: usize,
    /// Games that hit the safety ceiling without finding the secret
    pub unsolved: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    fn from_records(records: Vec<GameRecord>, loss_threshold: usize, duration: Duration) -> Self {
        let total_games = records.len();
        let mut total_turns = 0;
        let mut min_turns = usize::MAX;
        let mut max_turns = 0;
        let mut losses = 0;
        let mut unsolved = 0;
        let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

        for record in &records {
            total_turns += record.turns;
            min_turns = min_turns.min(record.turns);
            max_turns = max_turns.max(record.turns);
            if record.turns > loss_threshold {
                losses += 1;
            }
            if !record.won {
                unsolved += 1;
            }
            *distribution.entry(record.turns).or_insert(0) += 1;
        }

        let mean_turns = if total_games > 0 {
            total_turns as f64 / total_games as f64
        } else {
            0.0
        };

        Self {
            records,
            total_games,
            mean_turns,
            min_turns: if total_games > 0 { min_turns } else { 0 },
            max_turns,
            losses,
            loss_threshold,
            unsolved,
            distribution,
            duration,
            games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        }
    }

    /// The three headline numbers
    #[must_use]
    pub fn report(&self) -> BenchmarkReport {
        BenchmarkReport {
            mean_turns: round2(self.mean_turns),
            max_turns: self.max_turns,
            losses: self.losses,
            loss_threshold: self.loss_threshold,
        }
    }

    /// Secrets that took the most turns, hardest first
    #[must_use]
    pub fn hardest(&self, count: usize) -> Vec<&GameRecord> {
        let mut sorted: Vec<&GameRecord> = self.records.iter().collect();
        sorted.sort_by_key(|r| std::cmp::Reverse(r.turns));
        sorted.truncate(count);
        sorted
    }
}

/// Round to two decimals, ties to even
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Headline statistics of a benchmark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkReport {
    /// Mean turns, rounded to two decimals
    pub mean_turns: f64,
    pub max_turns: usize,
    pub losses: usize,
    pub loss_threshold: usize,
}

/// A single value in a [`BenchmarkReport`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportValue {
    Float(f64),
    Int(usize),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(value) => write!(f, "{value:.2}"),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

impl BenchmarkReport {
    /// Label → value pairs, ready for printing
    #[must_use]
    pub fn entries(&self) -> [(String, ReportValue); 3] {
        [
            (
                "# mean turns to guess secret".to_string(),
                ReportValue::Float(self.mean_turns),
            ),
            (
                "# maximum turns to guess secret".to_string(),
                ReportValue::Int(self.max_turns),
            ),
            (
                format!("# losses (> {} guesses)", self.loss_threshold),
                ReportValue::Int(self.losses),
            ),
        ]
    }
}

/// Run `factory`'s guesser against every code of `config.game`
///
/// The factory is called once per secret so no state leaks between games.
/// The first error from any game (for example a guesser producing a
/// malformed code) aborts the whole run.
///
/// # Errors
/// Returns `InvalidConfiguration` for an unusable board, turn limit or thread
/// count, and otherwise the first error raised by a simulated game.
///
/// # Examples
/// ```
/// use mastermind::commands::{BenchmarkConfig, run_benchmark};
/// use mastermind::core::{Code, GameConfig};
/// use mastermind::guesser::FixedGuesser;
///
/// let config = BenchmarkConfig::new(GameConfig::new(2, 2).unwrap());
/// let result = run_benchmark(|| FixedGuesser::new(Code::new([0, 0])), &config).unwrap();
///
/// let report = result.report();
/// assert_eq!(report.mean_turns, 750.25);
/// assert_eq!(report.max_turns, 1000);
/// assert_eq!(report.losses, 3);
/// ```
pub fn run_benchmark<F, G>(factory: F, config: &BenchmarkConfig) -> Result<BenchmarkResult>
where
    F: Fn() -> G + Sync,
    G: Guesser,
{
    run_benchmark_with(|_| factory(), config)
}

/// Like [`run_benchmark`], but the factory receives the code-space index of
/// the secret its guesser will play
///
/// Deriving per-game state (such as an RNG seed) from the index keeps results
/// identical across runs whatever the thread count.
///
/// # Errors
/// As [`run_benchmark`].
pub fn run_benchmark_with<F, G>(factory: F, config: &BenchmarkConfig) -> Result<BenchmarkResult>
where
    F: Fn(u64) -> G + Sync,
    G: Guesser,
{
    if config.max_turns == 0 {
        return Err(MastermindError::InvalidConfiguration(
            "max_turns must be at least 1".to_string(),
        ));
    }

    let space = CodeSpace::new(config.game)?;
    let total = usize::try_from(space.len()).map_err(|_| {
        MastermindError::InvalidConfiguration(format!(
            "{} codes do not fit in memory on this platform",
            space.len()
        ))
    })?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| MastermindError::InvalidConfiguration(e.to_string()))?;

    info!(
        "benchmarking {total} secrets ({} positions, {} colors) on {} threads",
        config.game.positions(),
        config.game.colors(),
        pool.current_num_threads()
    );

    let progress = progress_bar(total as u64, config.show_progress);
    let start = Instant::now();

    let records = pool.install(|| {
        (0..total)
            .into_par_iter()
            .map(|index| {
                let record = simulate(&factory, &space, index as u64, config);
                progress.inc(1);
                record
            })
            .collect::<Result<Vec<_>>>()
    });

    let duration = start.elapsed();
    match &records {
        Ok(_) => progress.finish_with_message("Complete!"),
        Err(_) => progress.abandon_with_message("Aborted"),
    }

    let result = BenchmarkResult::from_records(records?, config.loss_threshold, duration);
    info!(
        "benchmark finished in {:.2}s: mean {:.3} turns, max {}, {} losses",
        duration.as_secs_f64(),
        result.mean_turns,
        result.max_turns,
        result.losses
    );
    Ok(result)
}

/// Play a single secret with a fresh guesser
fn simulate<F, G>(
    factory: &F,
    space: &CodeSpace,
    index: u64,
    config: &BenchmarkConfig,
) -> Result<GameRecord>
where
    F: Fn(u64) -> G,
    G: Guesser,
{
    let secret = space.code_at(index).ok_or_else(|| {
        MastermindError::InvalidConfiguration(format!("code index {index} out of range"))
    })?;
    let game = Game::new(secret, config.game)?;
    let mut guesser = factory(index);
    let outcome = game.play(&mut guesser, config.max_turns)?;

    if !outcome.won {
        debug!(
            "secret [{}] not found within {} turns",
            game.secret(),
            config.max_turns
        );
    }

    Ok(GameRecord {
        secret: game.secret().clone(),
        turns: outcome.turns,
        won: outcome.won,
    })
}

fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} Benchmarking [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec}) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
