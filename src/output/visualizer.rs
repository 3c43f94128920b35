//! Turn-by-turn rendering of a game
//!
//! A [`Visualizer`] is told about each evaluated guess and about the final
//! outcome. [`TextVisualizer`] prints a compact board to any writer.

use super::formatters::{feedback_pegs, format_code};
use crate::core::{Code, Feedback, GameConfig};
use colored::Colorize;
use std::io::{self, Write};

/// Receives a game's turns as they are played
pub trait Visualizer {
    /// Called after every evaluated guess
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn show_turn(&mut self, turn: usize, guess: &Code, feedback: Feedback) -> io::Result<()>;

    /// Called once when the game ends
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn finish(&mut self, won: bool, secret: &Code) -> io::Result<()>;
}

/// Plain-text board printer
pub struct TextVisualizer<W> {
    out: W,
    positions: usize,
    force_ascii: bool,
}

impl<W: Write> TextVisualizer<W> {
    /// Create a visualizer and print the board header
    ///
    /// # Errors
    /// Returns an error if the header cannot be written.
    pub fn new(mut out: W, config: &GameConfig, force_ascii: bool) -> io::Result<Self> {
        writeln!(out, "\n{}", "=== MasterMind ===".bright_cyan().bold())?;
        writeln!(
            out,
            "Positions: {}, Colors: {}",
            config.positions(),
            config.colors()
        )?;
        writeln!(out, "{}", rule(config.positions()))?;

        Ok(Self {
            out,
            positions: config.positions(),
            force_ascii,
        })
    }

    /// Recover the writer, e.g. to inspect captured output
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextVisualizer<io::Stdout> {
    /// Visualizer printing to stdout
    ///
    /// # Errors
    /// Returns an error if the header cannot be written.
    pub fn stdout(config: &GameConfig, force_ascii: bool) -> io::Result<Self> {
        Self::new(io::stdout(), config, force_ascii)
    }
}

fn rule(positions: usize) -> String {
    "-".repeat(14 + 3 * positions)
}

impl<W: Write> Visualizer for TextVisualizer<W> {
    fn show_turn(&mut self, turn: usize, guess: &Code, feedback: Feedback) -> io::Result<()> {
        writeln!(
            self.out,
            "Turn {turn:>2}: {}  | {feedback} {}",
            format_code(guess, self.force_ascii),
            feedback_pegs(feedback)
        )
    }

    fn finish(&mut self, won: bool, secret: &Code) -> io::Result<()> {
        let verdict = if won {
            "WIN 🎉".green().bold()
        } else {
            "LOSS ❌".red().bold()
        };
        writeln!(self.out, "{}", rule(self.positions))?;
        writeln!(
            self.out,
            "Secret: {}  ->  {verdict}\n",
            format_code(secret, self.force_ascii)
        )?;
        self.out.flush()
    }
}
