//! Core domain types for Mastermind
//!
//! Codes, board configuration, feedback scoring and code-space enumeration.
//! Everything here is a pure function of its inputs.

mod code;
mod config;
mod error;
mod feedback;
mod space;

pub use code::Code;
pub use config::GameConfig;
pub use error::{CodeError, MastermindError, Result};
pub use feedback::Feedback;
pub use space::{CodeSpace, CodeSpaceIter};
