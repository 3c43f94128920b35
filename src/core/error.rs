//! Error types shared by every layer of the crate

use std::fmt;
use std::io;

/// Why a code failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// The code has the wrong number of pegs
    WrongLength { expected: usize, actual: usize },
    /// A peg holds a color outside `[0, colors)`
    ColorOutOfRange {
        position: usize,
        value: u8,
        colors: u8,
    },
    /// A token could not be read as a color index
    NotAnInteger(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "code must have exactly {expected} pegs, got {actual}")
            }
            Self::ColorOutOfRange {
                position,
                value,
                colors,
            } => write!(
                f,
                "peg {} has color {value}, expected a value in [0, {colors})",
                position + 1
            ),
            Self::NotAnInteger(token) => write!(f, "'{token}' is not a color index"),
        }
    }
}

/// Errors raised while configuring, playing or benchmarking Mastermind
#[derive(Debug)]
pub enum MastermindError {
    /// Positions, colors, turn limit or worker pool are unusable
    InvalidConfiguration(String),
    /// A secret or guess violates the code invariants
    InvalidCode(CodeError),
    /// A guesser could not produce its next guess
    GuesserFailed(String),
    /// A guess was submitted after the game had already ended
    GameOver,
    /// Reading input or writing output failed
    Io(io::Error),
}

impl fmt::Display for MastermindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(reason) => write!(f, "invalid configuration: {reason}"),
            Self::InvalidCode(reason) => write!(f, "invalid code: {reason}"),
            Self::GuesserFailed(reason) => write!(f, "guesser failed: {reason}"),
            Self::GameOver => write!(f, "the game is already over"),
            Self::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for MastermindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CodeError> for MastermindError {
    fn from(err: CodeError) -> Self {
        Self::InvalidCode(err)
    }
}

impl From<io::Error> for MastermindError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = MastermindError> = std::result::Result<T, E>;
