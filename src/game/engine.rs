//! Game definition and the play loop

use super::state::{GameState, Outcome, TurnRecord};
use crate::core::{Code, Feedback, GameConfig, MastermindError, Result};
use crate::guesser::Guesser;
use crate::output::Visualizer;
use log::{debug, trace};

/// Turn limit under classic rules
pub const CLASSIC_MAX_TURNS: usize = 6;

/// A Mastermind game: a fixed, validated secret on a fixed board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    secret: Code,
    config: GameConfig,
}

impl Game {
    /// Create a game around `secret`
    ///
    /// # Errors
    /// Returns `InvalidCode` if the secret does not fit `config`.
    pub fn new(secret: Code, config: GameConfig) -> Result<Self> {
        config.validate(&secret)?;
        Ok(Self { secret, config })
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Score a guess against the secret
    ///
    /// # Errors
    /// Returns `InvalidCode` if the guess does not fit the board.
    pub fn evaluate(&self, guess: &Code) -> Result<Feedback> {
        Feedback::calculate(&self.config, &self.secret, guess)
    }

    /// Start a step-by-step round limited to `max_turns`
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `max_turns` is zero.
    pub fn round(&self, max_turns: usize) -> Result<Round<'_>> {
        Round::new(self, max_turns)
    }

    /// Let `guesser` play until it wins or runs out of turns
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` for a zero turn limit, and propagates
    /// any error from the guesser or from evaluating a malformed guess. A
    /// malformed guess aborts the game; it is never counted as a loss.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, GameConfig};
    /// use mastermind::game::Game;
    /// use mastermind::guesser::FixedGuesser;
    ///
    /// let game = Game::new(Code::new([1, 2, 1, 3]), GameConfig::CLASSIC).unwrap();
    ///
    /// let mut lucky = FixedGuesser::new(Code::new([1, 2, 1, 3]));
    /// let outcome = game.play(&mut lucky, 6).unwrap();
    /// assert!(outcome.won);
    /// assert_eq!(outcome.turns, 1);
    ///
    /// let mut stubborn = FixedGuesser::new(Code::new([0, 0, 0, 0]));
    /// let outcome = game.play(&mut stubborn, 6).unwrap();
    /// assert!(!outcome.won);
    /// assert_eq!(outcome.turns, 6);
    /// ```
    pub fn play<G: Guesser + ?Sized>(&self, guesser: &mut G, max_turns: usize) -> Result<Outcome> {
        let mut round = self.round(max_turns)?;
        round.run(guesser, |_| Ok(()))
    }

    /// Same loop as [`Game::play`], rendering every turn and the final result
    ///
    /// # Errors
    /// As [`Game::play`], plus `Io` if the visualizer cannot write.
    pub fn play_with_visualizer<G, V>(
        &self,
        guesser: &mut G,
        visualizer: &mut V,
        max_turns: usize,
    ) -> Result<Outcome>
    where
        G: Guesser + ?Sized,
        V: Visualizer + ?Sized,
    {
        let mut round = self.round(max_turns)?;
        let outcome = round.run(guesser, |record| {
            visualizer.show_turn(record.turn, &record.guess, record.feedback)?;
            Ok(())
        })?;
        visualizer.finish(outcome.won, &self.secret)?;
        Ok(outcome)
    }
}

/// A game in progress, advanced one guess at a time
#[derive(Debug, Clone)]
pub struct Round<'g> {
    game: &'g Game,
    max_turns: usize,
    state: GameState,
    last_guess: Option<Code>,
}

impl<'g> Round<'g> {
    /// # Errors
    /// Returns `InvalidConfiguration` if `max_turns` is zero.
    pub fn new(game: &'g Game, max_turns: usize) -> Result<Self> {
        if max_turns == 0 {
            return Err(MastermindError::InvalidConfiguration(
                "max_turns must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            game,
            max_turns,
            state: GameState::INITIAL,
            last_guess: None,
        })
    }

    #[must_use]
    pub const fn game(&self) -> &'g Game {
        self.game
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Most recent guess submitted, if any
    #[must_use]
    pub const fn last_guess(&self) -> Option<&Code> {
        self.last_guess.as_ref()
    }

    /// Final result, once the round has ended
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::from_state(&self.state)
    }

    /// Evaluate one guess and move to the next state
    ///
    /// # Errors
    /// Returns `GameOver` after the round has ended and `InvalidCode` for a
    /// malformed guess; the state is unchanged on error.
    pub fn submit(&mut self, guess: Code) -> Result<TurnRecord> {
        let (next, record) = self.state.advance(self.game, guess, self.max_turns)?;
        trace!(
            "turn {}: guess [{}] scored {}",
            record.turn, record.guess, record.feedback
        );
        self.last_guess = Some(record.guess.clone());
        self.state = next;
        Ok(record)
    }

    /// Ask the guesser for the next guess and submit it
    ///
    /// # Errors
    /// Propagates guesser and evaluation errors.
    pub fn step<G: Guesser + ?Sized>(&mut self, guesser: &mut G) -> Result<TurnRecord> {
        let GameState::InProgress {
            turn,
            last_feedback,
        } = self.state
        else {
            return Err(MastermindError::GameOver);
        };

        let config = self.game.config();
        let guess = guesser.next_guess(turn, last_feedback, &config)?;
        self.submit(guess)
    }

    /// Drive the round to the end, calling `on_turn` after every evaluation
    fn run<G, F>(&mut self, guesser: &mut G, mut on_turn: F) -> Result<Outcome>
    where
        G: Guesser + ?Sized,
        F: FnMut(&TurnRecord) -> Result<()>,
    {
        loop {
            let record = self.step(guesser)?;
            on_turn(&record)?;

            if let Some(outcome) = self.outcome() {
                debug!(
                    "game over for secret [{}]: {} after {} turns",
                    self.game.secret(),
                    if outcome.won { "won" } else { "lost" },
                    outcome.turns
                );
                return Ok(outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guesser::{ConsistentGuesser, FixedGuesser, RandomGuesser};

    fn classic(secret: [u8; 4]) -> Game {
        Game::new(Code::new(secret), GameConfig::CLASSIC).unwrap()
    }

    /// Guesser that records what it was shown
    struct Spy {
        script: Vec<Code>,
        seen: Vec<(usize, Option<Feedback>)>,
    }

    impl Guesser for Spy {
        fn next_guess(
            &mut self,
            turn: usize,
            last_feedback: Option<Feedback>,
            _config: &GameConfig,
        ) -> Result<Code> {
            self.seen.push((turn, last_feedback));
            Ok(self.script[(turn - 1) % self.script.len()].clone())
        }
    }

    /// Visualizer that records its calls
    #[derive(Default)]
    struct Recorder {
        turns: Vec<(usize, Code, Feedback)>,
        finished: Option<(bool, Code)>,
    }

    impl Visualizer for Recorder {
        fn show_turn(
            &mut self,
            turn: usize,
            guess: &Code,
            feedback: Feedback,
        ) -> std::io::Result<()> {
            self.turns.push((turn, guess.clone(), feedback));
            Ok(())
        }

        fn finish(&mut self, won: bool, secret: &Code) -> std::io::Result<()> {
            self.finished = Some((won, secret.clone()));
            Ok(())
        }
    }

    #[test]
    fn invalid_secret_rejected() {
        assert!(matches!(
            Game::new(Code::new([1, 2, 6, 0]), GameConfig::CLASSIC),
            Err(MastermindError::InvalidCode(_))
        ));
        assert!(Game::new(Code::new([1, 2]), GameConfig::CLASSIC).is_err());
    }

    #[test]
    fn evaluate_uses_secret() {
        let game = classic([1, 2, 1, 3]);
        assert_eq!(
            game.evaluate(&Code::new([1, 1, 2, 2])).unwrap(),
            Feedback::new(1, 2)
        );
    }

    #[test]
    fn secret_guessed_first_turn_wins_in_one() {
        let game = classic([4, 4, 0, 1]);
        let mut guesser = FixedGuesser::new(game.secret().clone());
        let outcome = game.play(&mut guesser, 6).unwrap();

        assert_eq!(
            outcome,
            Outcome {
                won: true,
                turns: 1,
                final_guess: Code::new([4, 4, 0, 1])
            }
        );
    }

    #[test]
    fn never_matching_loses_at_max_turns() {
        let game = classic([1, 2, 1, 3]);
        let mut guesser = FixedGuesser::new(Code::new([0, 0, 0, 0]));

        for max_turns in [1, 6, 25] {
            let outcome = game.play(&mut guesser, max_turns).unwrap();
            assert!(!outcome.won);
            assert_eq!(outcome.turns, max_turns);
            assert_eq!(outcome.final_guess, Code::new([0, 0, 0, 0]));
        }
    }

    #[test]
    fn guesser_sees_turns_and_previous_feedback() {
        let game = classic([1, 2, 1, 3]);
        let mut spy = Spy {
            script: vec![
                Code::new([1, 1, 2, 2]),
                Code::new([0, 0, 0, 0]),
                Code::new([1, 2, 1, 3]),
            ],
            seen: Vec::new(),
        };

        let outcome = game.play(&mut spy, 6).unwrap();
        assert!(outcome.won);
        assert_eq!(outcome.turns, 3);
        assert_eq!(
            spy.seen,
            vec![
                (1, None),
                (2, Some(Feedback::new(1, 2))),
                (3, Some(Feedback::new(0, 0))),
            ]
        );
    }

    #[test]
    fn malformed_guess_aborts_instead_of_losing() {
        let game = classic([1, 2, 1, 3]);
        let mut guesser = FixedGuesser::new(Code::new([1, 2, 9, 3]));
        assert!(matches!(
            game.play(&mut guesser, 6),
            Err(MastermindError::InvalidCode(_))
        ));
    }

    #[test]
    fn zero_turn_limit_rejected() {
        let game = classic([1, 2, 1, 3]);
        let mut guesser = FixedGuesser::new(Code::new([1, 2, 1, 3]));
        assert!(matches!(
            game.play(&mut guesser, 0),
            Err(MastermindError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn visualizer_sees_every_turn_then_finish() {
        let game = classic([1, 2, 1, 3]);
        let mut guesser = ConsistentGuesser::new();
        let mut recorder = Recorder::default();

        let outcome = game
            .play_with_visualizer(&mut guesser, &mut recorder, 20)
            .unwrap();

        assert!(outcome.won);
        assert_eq!(recorder.turns.len(), outcome.turns);
        for (i, (turn, _, _)) in recorder.turns.iter().enumerate() {
            assert_eq!(*turn, i + 1);
        }
        let (_, last_guess, last_feedback) = recorder.turns.last().unwrap();
        assert_eq!(last_guess, game.secret());
        assert!(last_feedback.is_win(4));
        assert_eq!(recorder.finished, Some((true, game.secret().clone())));
    }

    #[test]
    fn visualized_and_plain_play_agree() {
        let game = classic([5, 0, 3, 3]);

        let plain = game.play(&mut RandomGuesser::seeded(9), 30).unwrap();
        let mut recorder = Recorder::default();
        let shown = game
            .play_with_visualizer(&mut RandomGuesser::seeded(9), &mut recorder, 30)
            .unwrap();

        assert_eq!(plain, shown);
        assert_eq!(recorder.finished.map(|(won, _)| won), Some(plain.won));
    }

    #[test]
    fn round_can_be_driven_by_hand() {
        let game = classic([1, 2, 1, 3]);
        let mut round = game.round(2).unwrap();

        let first = round.submit(Code::new([0, 0, 0, 0])).unwrap();
        assert_eq!(first.turn, 1);
        assert!(!round.is_over());
        assert_eq!(round.last_guess(), Some(&Code::new([0, 0, 0, 0])));

        round.submit(Code::new([3, 3, 3, 3])).unwrap();
        assert!(round.is_over());
        assert_eq!(
            round.outcome(),
            Some(Outcome {
                won: false,
                turns: 2,
                final_guess: Code::new([3, 3, 3, 3])
            })
        );

        assert!(matches!(
            round.submit(Code::new([1, 2, 1, 3])),
            Err(MastermindError::GameOver)
        ));
    }

    #[test]
    fn rejected_guess_does_not_use_a_turn() {
        let game = classic([1, 2, 1, 3]);
        let mut round = game.round(6).unwrap();

        assert!(round.submit(Code::new([7, 7, 7, 7])).is_err());
        assert_eq!(round.state(), &GameState::INITIAL);
    }
}
