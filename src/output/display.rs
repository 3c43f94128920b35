//! Display functions for command results

use super::formatters::{feedback_pegs, format_code};
use crate::commands::{BenchmarkResult, EvaluationResult};
use crate::game::Outcome;
use colored::Colorize;

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, strategy: &str, hardest: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Report:".bright_cyan().bold());
    for (label, value) in result.report().entries() {
        println!("   {label:<34} {}", value.to_string().bright_yellow().bold());
    }

    println!("\n⚙️  {}", "Run:".bright_cyan().bold());
    println!("   Strategy:         {strategy}");
    println!("   Secrets tested:   {}", result.total_games);
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    if result.unsolved > 0 {
        println!(
            "   Unsolved:         {}",
            format!("{} (hit the turn ceiling)", result.unsolved).red()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut turn_counts: Vec<(usize, usize)> =
        result.distribution.iter().map(|(&t, &c)| (t, c)).collect();
    turn_counts.sort_unstable();
    for (turns, count) in turn_counts {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        let label = if turns > result.loss_threshold {
            format!("{turns:>4}").red()
        } else {
            format!("{turns:>4}").normal()
        };
        println!("   {label}: {bar} {count:5} ({pct:5.1}%)");
    }

    if hardest > 0 {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for record in result.hardest(hardest) {
            println!(
                "   [{}] {} turns{}",
                record.secret,
                record.turns,
                if record.won { "" } else { " (unsolved)" }
            );
        }
    }
}

/// Print the result of scoring one guess
pub fn print_evaluation_result(result: &EvaluationResult, force_ascii: bool) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   [{}]",
        format_code(&result.secret, force_ascii),
        result.secret
    );
    println!(
        "Guess:  {}   [{}]",
        format_code(&result.guess, force_ascii),
        result.guess
    );
    println!("{}", "─".repeat(40).cyan());
    println!(
        "{} {}",
        result.feedback.to_string().bright_yellow().bold(),
        feedback_pegs(result.feedback)
    );
    if result.is_win() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print a one-line summary of a finished game
pub fn print_outcome(outcome: &Outcome) {
    if outcome.won {
        println!(
            "{}",
            format!(
                "✅ Solved in {} {}",
                outcome.turns,
                if outcome.turns == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Failed to solve in {} guesses (last guess: {})",
                outcome.turns, outcome.final_guess
            )
            .red()
            .bold()
        );
    }
}
