//! Formatting utilities for terminal output

use crate::core::{Code, Feedback};

/// Distinct emoji for the first colors
pub const EMOJI_PALETTE: [&str; 15] = [
    "🔴", "🟢", "🔵", "🟡", "🟣", "🟠", "🟤", "⚫", "⚪", "🟧", "🟦", "🟨", "🟩", "🟥", "🟪",
];

/// Black peg symbol (right color, right position)
pub const BLACK_PEG: char = '○';

/// White peg symbol (right color, wrong position)
pub const WHITE_PEG: char = '●';

/// Spreadsheet-style column label: 0 → A, 25 → Z, 26 → AA, 27 → AB
#[must_use]
pub fn letter_code(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Symbol for one color
///
/// Emoji for the first palette entries, then letters. With `force_ascii`
/// every color is a letter, starting from A.
#[must_use]
pub fn color_symbol(color: u8, force_ascii: bool) -> String {
    let index = usize::from(color);
    if force_ascii {
        letter_code(index)
    } else if let Some(emoji) = EMOJI_PALETTE.get(index) {
        (*emoji).to_string()
    } else {
        letter_code(index - EMOJI_PALETTE.len())
    }
}

/// Render a code as space-separated color symbols
#[must_use]
pub fn format_code(code: &Code, force_ascii: bool) -> String {
    code.pegs()
        .iter()
        .map(|&peg| color_symbol(peg, force_ascii))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render feedback as a row of pegs, blacks first
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let mut pegs = String::with_capacity(feedback.total() * 3);
    pegs.extend(std::iter::repeat_n(BLACK_PEG, feedback.black()));
    pegs.extend(std::iter::repeat_n(WHITE_PEG, feedback.white()));
    pegs
}
