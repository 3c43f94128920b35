//! End-to-end benchmark of the classic board

use mastermind::commands::{BenchmarkConfig, ReportValue, run_benchmark};
use mastermind::core::{Code, GameConfig};
use mastermind::game::Game;
use mastermind::guesser::{ConsistentGuesser, StrategyKind};

#[test]
fn consistent_guesser_on_classic_board() {
    let config = BenchmarkConfig::default();
    let result = run_benchmark(ConsistentGuesser::new, &config).unwrap();

    assert_eq!(result.total_games, 1296);
    assert_eq!(result.unsolved, 0);

    let report = result.report();
    assert!((report.mean_turns - 5.76).abs() < 1e-9);
    assert_eq!(report.max_turns, 9);
    assert_eq!(report.losses, 251);

    let entries = report.entries();
    assert_eq!(entries[0].1, ReportValue::Float(5.76));
    assert_eq!(entries[2].0, "# losses (> 6 guesses)");
}

#[test]
fn strategy_wrapper_matches_direct_guesser() {
    let config = BenchmarkConfig::new(GameConfig::new(3, 4).unwrap());
    let direct = run_benchmark(ConsistentGuesser::new, &config).unwrap();
    let wrapped = run_benchmark(|| StrategyKind::Consistent.build(None), &config).unwrap();

    assert_eq!(direct.records, wrapped.records);
}

#[test]
fn known_secret_takes_four_turns() {
    let game = Game::new(Code::new([1, 2, 1, 3]), GameConfig::CLASSIC).unwrap();
    let outcome = game.play(&mut ConsistentGuesser::new(), 10).unwrap();

    assert!(outcome.won);
    assert_eq!(outcome.turns, 4);
    assert_eq!(outcome.final_guess, Code::new([1, 2, 1, 3]));
}
