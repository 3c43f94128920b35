//! Mastermind guessers
//!
//! The Guesser trait plus the built-in strategies.

pub mod consistent;
pub mod fixed;
pub mod manual;
pub mod random;
pub mod strategy;

pub use consistent::ConsistentGuesser;
pub use fixed::FixedGuesser;
pub use manual::ManualGuesser;
pub use random::RandomGuesser;
pub use strategy::{Guesser, Strategy, StrategyKind};
