//! Terminal output: turn visualization and result printing

pub mod display;
pub mod formatters;
pub mod visualizer;

pub use display::{print_benchmark_result, print_evaluation_result, print_outcome};
pub use visualizer::{TextVisualizer, Visualizer};
