//! Interactive TUI for a human code breaker

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
