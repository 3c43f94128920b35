//! Command implementations

pub mod benchmark;
pub mod evaluate;
pub mod simple;

pub use benchmark::{
    BenchmarkConfig, BenchmarkReport, BenchmarkResult, GameRecord, ReportValue, run_benchmark,
    run_benchmark_with,
};
pub use evaluate::{EvaluationResult, evaluate_guess};
pub use simple::{SimpleConfig, run_simple};
