//! The Mastermind game state machine
//!
//! A [`Game`] owns a validated secret. Playing it moves through
//! [`GameState::InProgress`] until a guess scores all blacks
//! ([`GameState::Won`]) or the turn limit is used up ([`GameState::Lost`]).

mod engine;
mod state;

pub use engine::{CLASSIC_MAX_TURNS, Game, Round};
pub use state::{GameState, Outcome, TurnRecord};
