//! TUI application state and logic

use crate::core::{Code, CodeSpace, GameConfig, MastermindError};
use crate::game::{Game, GameState, Outcome, TurnRecord};
use anyhow::{Result, bail};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Largest color count that can be typed with a single key (0-9, a-z)
pub const MAX_KEYED_COLORS: u8 = 36;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub max_turns: usize,
    pub game: Game,
    pub state: GameState,
    pub history: Vec<TurnRecord>,
    pub input: Vec<u8>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
    space: CodeSpace,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins keyed by the turn they were won on
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl App {
    /// Create an app with a fresh random secret
    ///
    /// # Errors
    /// Returns an error if the board cannot be typed on a keyboard (more than
    /// 36 colors), the code space is too large, or `max_turns` is zero.
    pub fn new(config: GameConfig, max_turns: usize, seed: Option<u64>) -> Result<Self> {
        if config.colors() > MAX_KEYED_COLORS {
            bail!("interactive mode supports at most {MAX_KEYED_COLORS} colors");
        }
        if max_turns == 0 {
            return Err(MastermindError::InvalidConfiguration(
                "max_turns must be at least 1".to_string(),
            )
            .into());
        }

        let space = CodeSpace::new(config)?;
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let game = Game::new(space.sample(&mut rng), config)?;

        let mut app = Self {
            config,
            max_turns,
            game,
            state: GameState::INITIAL,
            history: Vec::new(),
            input: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
            space,
            rng,
        };
        app.add_message(
            &format!(
                "Crack the secret: {} pegs, colors 0-{}, {max_turns} turns.",
                config.positions(),
                key_for_color(config.colors() - 1)
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Append a peg typed as a key; ignores keys outside the board's colors
    pub fn push_peg(&mut self, key: char) {
        if self.input.len() >= self.config.positions() {
            return;
        }
        match color_for_key(key) {
            Some(color) if self.is_color_key(key) => self.input.push(color),
            _ => self.add_message(
                &format!("'{key}' is not a color on this board"),
                MessageStyle::Error,
            ),
        }
    }

    pub fn pop_peg(&mut self) {
        self.input.pop();
    }

    /// Submit the pegs typed so far as a guess
    pub fn submit_guess(&mut self) {
        if self.input.len() != self.config.positions() {
            self.add_message(
                &format!("A guess needs exactly {} pegs", self.config.positions()),
                MessageStyle::Error,
            );
            return;
        }

        let guess = Code::new(std::mem::take(&mut self.input));
        match self.state.advance(&self.game, guess, self.max_turns) {
            Ok((next, record)) => {
                self.add_message(
                    &format!("Turn {}: {}", record.turn, record.feedback),
                    MessageStyle::Info,
                );
                self.history.push(record);
                self.state = next;
                if let Some(outcome) = Outcome::from_state(&self.state) {
                    self.finish(&outcome);
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish(&mut self, outcome: &Outcome) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        if outcome.won {
            self.stats.games_won += 1;
            *self
                .stats
                .guess_distribution
                .entry(outcome.turns)
                .or_insert(0) += 1;
            let celebration = match outcome.turns {
                1 => "🎯 FIRST TRY! Were you peeking? 🌟".to_string(),
                2..=3 => format!("🔥 Cracked in {} turns! 🔥", outcome.turns),
                _ => format!("🎉 Solved in {} turns! 🎉", outcome.turns),
            };
            self.add_message(&celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!("❌ Out of turns. The secret was {}", self.game.secret()),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Draw a new secret and clear the board
    ///
    /// # Errors
    /// Returns `InvalidCode` if the drawn secret does not fit the board; the
    /// current game is left untouched.
    pub fn new_game(&mut self) -> crate::core::Result<()> {
        let secret = self.space.sample(&mut self.rng);
        self.game = Game::new(secret, self.config)?;
        self.state = GameState::INITIAL;
        self.history.clear();
        self.input.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! A fresh secret is hidden.", MessageStyle::Info);
        Ok(())
    }

    /// Give up on the current game
    pub fn reveal(&mut self) {
        if self.state.is_over() {
            return;
        }
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;
        self.add_message(
            &format!("The secret was {}", self.game.secret()),
            MessageStyle::Error,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.input_mode == InputMode::GameOver
    }

    #[must_use]
    pub fn turns_left(&self) -> usize {
        if self.state.is_over() {
            0
        } else {
            // turn <= max_turns while in progress
            self.max_turns - self.state.turn() + 1
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn is_color_key(&self, key: char) -> bool {
        color_for_key(key).is_some_and(|color| color < self.config.colors())
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match (code, self.input_mode) {
            (KeyCode::Char('c'), _) if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (KeyCode::Esc, _) | (KeyCode::Char('q'), InputMode::GameOver) => {
                self.should_quit = true;
            }
            (KeyCode::Char('n'), InputMode::GameOver) => {
                if let Err(err) = self.new_game() {
                    self.add_message(&err.to_string(), MessageStyle::Error);
                }
            }
            (KeyCode::Char('?'), InputMode::Guessing) => self.reveal(),
            // Letters double as colors on wide boards
            (KeyCode::Char('q'), InputMode::Guessing) if !self.is_color_key('q') => {
                self.should_quit = true;
            }
            (KeyCode::Char(c), InputMode::Guessing) => self.push_peg(c),
            (KeyCode::Backspace, InputMode::Guessing) => self.pop_peg(),
            (KeyCode::Enter, InputMode::Guessing) => self.submit_guess(),
            _ => {}
        }
    }
}

/// Key that types `color`: 0-9 then a-z
#[must_use]
pub fn key_for_color(color: u8) -> char {
    char::from_digit(u32::from(color), u32::from(MAX_KEYED_COLORS)).unwrap_or('?')
}

/// Color typed by `key`: 0-9 then a-z
#[must_use]
pub fn color_for_key(key: char) -> Option<u8> {
    key.to_ascii_lowercase()
        .to_digit(u32::from(MAX_KEYED_COLORS))
        .and_then(|d| u8::try_from(d).ok())
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal initialization fails or if there's an I/O error
/// during terminal operations.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code, key.modifiers);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(GameConfig::CLASSIC, 6, Some(1)).unwrap()
    }

    fn type_guess(app: &mut App, keys: &str) {
        for key in keys.chars() {
            app.push_peg(key);
        }
        app.submit_guess();
    }

    fn secret_keys(app: &App) -> String {
        app.game
            .secret()
            .pegs()
            .iter()
            .map(|&c| key_for_color(c))
            .collect()
    }

    #[test]
    fn key_mapping_round_trips() {
        for color in 0..MAX_KEYED_COLORS {
            assert_eq!(color_for_key(key_for_color(color)), Some(color));
        }
        assert_eq!(color_for_key('A'), Some(10));
        assert_eq!(color_for_key('!'), None);
    }

    #[test]
    fn seeded_apps_share_a_secret() {
        assert_eq!(app().game.secret(), app().game.secret());
    }

    #[test]
    fn rejects_unkeyable_boards() {
        let config = GameConfig::new(4, 40).unwrap();
        assert!(App::new(config, 6, Some(0)).is_err());
        assert!(App::new(GameConfig::CLASSIC, 0, Some(0)).is_err());
    }

    #[test]
    fn out_of_range_key_is_ignored() {
        let mut app = app();
        app.push_peg('7');
        assert!(app.input.is_empty());
        app.push_peg('5');
        assert_eq!(app.input, vec![5]);
    }

    #[test]
    fn input_is_capped_at_positions() {
        let mut app = app();
        for _ in 0..10 {
            app.push_peg('1');
        }
        assert_eq!(app.input.len(), 4);
        app.pop_peg();
        assert_eq!(app.input.len(), 3);
    }

    #[test]
    fn short_guess_not_submitted() {
        let mut app = app();
        type_guess(&mut app, "12");
        assert!(app.history.is_empty());
        assert_eq!(app.input, vec![1, 2]);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut app = app();
        let keys = secret_keys(&app);
        type_guess(&mut app, &keys);

        assert_eq!(app.history.len(), 1);
        assert!(app.history[0].feedback.is_win(4));
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution.get(&1), Some(&1));
        assert_eq!(app.turns_left(), 0);
    }

    #[test]
    fn running_out_of_turns_loses() {
        let mut app = App::new(GameConfig::CLASSIC, 2, Some(1)).unwrap();
        let keys = secret_keys(&app);
        let wrong: String = keys
            .chars()
            .map(|c| if c == '0' { '1' } else { '0' })
            .collect();

        type_guess(&mut app, &wrong);
        assert_eq!(app.turns_left(), 1);
        type_guess(&mut app, &wrong);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn new_game_resets_board() {
        let mut app = app();
        type_guess(&mut app, "0000");
        app.reveal();
        assert!(app.is_revealed());

        app.new_game().unwrap();
        assert!(app.history.is_empty());
        assert_eq!(app.state, GameState::INITIAL);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn huge_turn_limit_is_playable() {
        let mut app = App::new(GameConfig::CLASSIC, usize::MAX, Some(1)).unwrap();
        assert_eq!(app.turns_left(), usize::MAX);

        let keys = secret_keys(&app);
        type_guess(&mut app, &keys);
        assert_eq!(app.stats.guess_distribution.get(&1), Some(&1));
        assert_eq!(app.turns_left(), 0);
    }

    #[test]
    fn failed_new_game_keeps_current_game() {
        let mut app = app();
        app.reveal();
        let secret = app.game.secret().clone();

        // The sampled secret no longer fits the board
        app.config = GameConfig::new(5, 6).unwrap();
        assert!(matches!(
            app.new_game(),
            Err(MastermindError::InvalidCode(_))
        ));
        assert_eq!(app.game.secret(), &secret);
        assert!(app.is_revealed());

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
        assert!(app.is_revealed());
    }

    #[test]
    fn keys_drive_the_app() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert!(app.input.is_empty());

        app.handle_key(KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(app.is_revealed());
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(!app.is_revealed());

        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn q_is_a_color_on_wide_boards() {
        let config = GameConfig::new(2, 30).unwrap();
        let mut app = App::new(config, 6, Some(3)).unwrap();
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.should_quit);
        assert_eq!(app.input, vec![26]);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "m9");
    }
}
