//! Mastermind
//!
//! A Mastermind simulator: feedback scoring, a turn-limited game state
//! machine, exhaustive code-space enumeration and a parallel benchmark of
//! guessing strategies over every possible secret.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback, GameConfig};
//!
//! let config = GameConfig::CLASSIC;
//! let secret = Code::new([1, 2, 1, 3]);
//! let guess = Code::new([1, 1, 2, 2]);
//!
//! let feedback = Feedback::calculate(&config, &secret, &guess).unwrap();
//! assert_eq!((feedback.black(), feedback.white()), (1, 2));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Guessing strategies
pub mod guesser;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
