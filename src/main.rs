//! Mastermind - CLI
//!
//! Play Mastermind in a TUI or on the command line, score single guesses,
//! and benchmark guessing strategies against every possible secret.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use mastermind::{
    commands::{BenchmarkConfig, SimpleConfig, evaluate_guess, run_benchmark_with, run_simple},
    core::{Code, GameConfig},
    game::CLASSIC_MAX_TURNS,
    guesser::{ManualGuesser, StrategyKind},
    output::{TextVisualizer, print_benchmark_result, print_evaluation_result, print_outcome},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind simulator with exhaustive strategy benchmarking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs in a code
    #[arg(short, long, global = true, default_value = "4")]
    positions: usize,

    /// Number of available colors
    #[arg(short, long, global = true, default_value = "6")]
    colors: u8,

    /// Strategy: consistent (default), random
    #[arg(short, long, global = true, default_value = "consistent")]
    strategy: String,

    /// Seed for random secrets and random strategies
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default): break a hidden code yourself
    Play {
        /// Turns before the game is lost
        #[arg(short = 't', long, default_value_t = CLASSIC_MAX_TURNS)]
        max_turns: usize,
    },

    /// Play one game in the terminal with a strategy or by hand
    Simple {
        /// Turns before the game is lost
        #[arg(short = 't', long, default_value_t = CLASSIC_MAX_TURNS)]
        max_turns: usize,

        /// Secret to play against, e.g. "1 2 1 3" (random if omitted)
        #[arg(long)]
        secret: Option<String>,

        /// Type the guesses yourself instead of using the strategy
        #[arg(short, long)]
        manual: bool,

        /// Show colors as letters instead of emoji
        #[arg(long)]
        ascii: bool,
    },

    /// Score one guess against a secret
    Evaluate {
        /// The secret code, e.g. "1 2 1 3"
        secret: String,

        /// The guessed code, e.g. "1 1 2 2"
        guess: String,

        /// Show colors as letters instead of emoji
        #[arg(long)]
        ascii: bool,
    },

    /// Play the strategy against every possible secret
    Benchmark {
        /// Worker threads (0 = all cores)
        #[arg(short = 'j', long, default_value = "0")]
        threads: usize,

        /// Safety ceiling on turns per game
        #[arg(long, default_value_t = BenchmarkConfig::DEFAULT_MAX_TURNS)]
        ceiling: usize,

        /// Games needing more turns than this count as losses
        #[arg(long, default_value_t = BenchmarkConfig::DEFAULT_LOSS_THRESHOLD)]
        loss_threshold: usize,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,

        /// Number of hardest secrets to list
        #[arg(long, default_value = "5")]
        hardest: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.positions, cli.colors)?;
    let strategy = StrategyKind::from_name(&cli.strategy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        max_turns: CLASSIC_MAX_TURNS,
    });

    match command {
        Commands::Play { max_turns } => run_play_command(config, max_turns, cli.seed),
        Commands::Simple {
            max_turns,
            secret,
            manual,
            ascii,
        } => run_simple_command(
            config,
            strategy,
            cli.seed,
            max_turns,
            secret.as_deref(),
            manual,
            ascii,
        ),
        Commands::Evaluate {
            secret,
            guess,
            ascii,
        } => {
            let result = evaluate_guess(config, &secret, &guess)?;
            print_evaluation_result(&result, ascii);
            Ok(())
        }
        Commands::Benchmark {
            threads,
            ceiling,
            loss_threshold,
            no_progress,
            hardest,
        } => {
            let bench = BenchmarkConfig {
                game: config,
                max_turns: ceiling,
                loss_threshold,
                threads,
                show_progress: !no_progress,
            };
            run_benchmark_command(&bench, strategy, cli.seed, hardest)
        }
    }
}

fn run_play_command(config: GameConfig, max_turns: usize, seed: Option<u64>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(config, max_turns, seed)?;
    run_tui(app)
}

fn run_simple_command(
    config: GameConfig,
    strategy: StrategyKind,
    seed: Option<u64>,
    max_turns: usize,
    secret: Option<&str>,
    manual: bool,
    ascii: bool,
) -> Result<()> {
    let mut simple = SimpleConfig::new(config);
    simple.max_turns = max_turns;
    simple.seed = seed;
    simple.secret = secret
        .map(str::parse::<Code>)
        .transpose()
        .context("invalid --secret")?;

    let mut visualizer = TextVisualizer::stdout(&config, ascii)?;
    let outcome = if manual {
        run_simple(&simple, &mut ManualGuesser::stdio(), &mut visualizer)?
    } else {
        run_simple(&simple, &mut strategy.build(seed), &mut visualizer)?
    };

    print_outcome(&outcome);
    Ok(())
}

fn run_benchmark_command(
    config: &BenchmarkConfig,
    strategy: StrategyKind,
    seed: Option<u64>,
    hardest: usize,
) -> Result<()> {
    println!(
        "Benchmarking '{}' on all {} codes ({} positions, {} colors)...",
        strategy.name(),
        config.game.space_size().map_or_else(|| "?".to_string(), |n| n.to_string()),
        config.game.positions(),
        config.game.colors()
    );

    // Game k plays with seed s + k
    let result = run_benchmark_with(
        |index| strategy.build(seed.map(|s| s.wrapping_add(index))),
        config,
    )?;

    print_benchmark_result(&result, strategy.name(), hardest);
    Ok(())
}
