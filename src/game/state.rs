//! Game states and the single-turn transition

use super::Game;
use crate::core::{Code, Feedback, MastermindError, Result};

/// Where a game currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the guess of `turn`
    InProgress {
        turn: usize,
        last_feedback: Option<Feedback>,
    },
    /// `guess` matched the secret on `turn`
    Won { turn: usize, guess: Code },
    /// The turn limit was reached; `guess` was the last one tried
    Lost { turns: usize, guess: Code },
}

impl GameState {
    /// State of a game before the first guess
    pub const INITIAL: Self = Self::InProgress {
        turn: 1,
        last_feedback: None,
    };

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }

    /// Turn the game is on, or ended on
    #[must_use]
    pub const fn turn(&self) -> usize {
        match self {
            Self::InProgress { turn, .. } | Self::Won { turn, .. } => *turn,
            Self::Lost { turns, .. } => *turns,
        }
    }

    /// Feedback the guesser sees on its next call
    #[must_use]
    pub const fn last_feedback(&self) -> Option<Feedback> {
        match self {
            Self::InProgress { last_feedback, .. } => *last_feedback,
            _ => None,
        }
    }

    /// Apply one guess
    ///
    /// Evaluates `guess` against the game's secret and returns the next state
    /// together with the record of this turn.
    ///
    /// # Errors
    /// Returns `InvalidCode` for a malformed guess and `GameOver` if the game
    /// has already ended.
    pub fn advance(&self, game: &Game, guess: Code, max_turns: usize) -> Result<(Self, TurnRecord)> {
        let Self::InProgress { turn, .. } = *self else {
            return Err(MastermindError::GameOver);
        };

        let feedback = game.evaluate(&guess)?;
        let record = TurnRecord {
            turn,
            guess: guess.clone(),
            feedback,
        };

        let next = if feedback.is_win(game.config().positions()) {
            Self::Won { turn, guess }
        } else if turn >= max_turns {
            Self::Lost {
                turns: max_turns,
                guess,
            }
        } else {
            Self::InProgress {
                turn: turn + 1,
                last_feedback: Some(feedback),
            }
        };

        Ok((next, record))
    }
}

/// One played turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub turn: usize,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Final result of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub won: bool,
    /// Winning turn, or the turn limit on a loss
    pub turns: usize,
    pub final_guess: Code,
}

impl Outcome {
    /// Outcome of a finished state, `None` while still in progress
    #[must_use]
    pub fn from_state(state: &GameState) -> Option<Self> {
        match state {
            GameState::InProgress { .. } => None,
            GameState::Won { turn, guess } => Some(Self {
                won: true,
                turns: *turn,
                final_guess: guess.clone(),
            }),
            GameState::Lost { turns, guess } => Some(Self {
                won: false,
                turns: *turns,
                final_guess: guess.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, GameConfig};

    fn game() -> Game {
        Game::new(Code::new([1, 2, 1, 3]), GameConfig::CLASSIC).unwrap()
    }

    #[test]
    fn initial_state() {
        assert_eq!(GameState::INITIAL.turn(), 1);
        assert_eq!(GameState::INITIAL.last_feedback(), None);
        assert!(!GameState::INITIAL.is_over());
    }

    #[test]
    fn wrong_guess_advances_turn() {
        let game = game();
        let (next, record) = GameState::INITIAL
            .advance(&game, Code::new([1, 1, 2, 2]), 6)
            .unwrap();

        assert_eq!(record.turn, 1);
        assert_eq!(record.feedback, Feedback::new(1, 2));
        assert_eq!(
            next,
            GameState::InProgress {
                turn: 2,
                last_feedback: Some(Feedback::new(1, 2))
            }
        );
    }

    #[test]
    fn right_guess_wins() {
        let game = game();
        let (next, _) = GameState::INITIAL
            .advance(&game, Code::new([1, 2, 1, 3]), 6)
            .unwrap();
        assert_eq!(
            next,
            GameState::Won {
                turn: 1,
                guess: Code::new([1, 2, 1, 3])
            }
        );
    }

    #[test]
    fn win_on_last_turn_is_still_a_win() {
        let game = game();
        let state = GameState::InProgress {
            turn: 6,
            last_feedback: Some(Feedback::new(0, 0)),
        };
        let (next, _) = state.advance(&game, Code::new([1, 2, 1, 3]), 6).unwrap();
        assert!(matches!(next, GameState::Won { turn: 6, .. }));
    }

    #[test]
    fn miss_on_last_turn_loses() {
        let game = game();
        let state = GameState::InProgress {
            turn: 6,
            last_feedback: None,
        };
        let (next, _) = state.advance(&game, Code::new([0, 0, 0, 0]), 6).unwrap();
        assert_eq!(
            next,
            GameState::Lost {
                turns: 6,
                guess: Code::new([0, 0, 0, 0])
            }
        );
    }

    #[test]
    fn finished_game_rejects_guesses() {
        let game = game();
        let state = GameState::Won {
            turn: 2,
            guess: Code::new([1, 2, 1, 3]),
        };
        assert!(matches!(
            state.advance(&game, Code::new([0, 0, 0, 0]), 6),
            Err(MastermindError::GameOver)
        ));
    }

    #[test]
    fn malformed_guess_keeps_state() {
        let game = game();
        let result = GameState::INITIAL.advance(&game, Code::new([0, 0]), 6);
        assert!(matches!(result, Err(MastermindError::InvalidCode(_))));
    }

    #[test]
    fn outcome_mirrors_terminal_state() {
        assert_eq!(Outcome::from_state(&GameState::INITIAL), None);

        let lost = GameState::Lost {
            turns: 6,
            guess: Code::new([0, 0, 0, 0]),
        };
        let outcome = Outcome::from_state(&lost).unwrap();
        assert!(!outcome.won);
        assert_eq!(outcome.turns, 6);
    }
}
