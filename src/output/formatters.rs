//! Formatting utilities for terminal output

use crate::core::{CellResult, Feedback, KeyStates, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows as printed under the board
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Color a single letter tile by its result
#[must_use]
pub fn tile(letter: char, result: Option<CellResult>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        Some(CellResult::Correct) => text.black().on_green().bold(),
        Some(CellResult::Present) => text.black().on_yellow().bold(),
        Some(CellResult::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render a guessed word as a row of colored tiles
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.cells())
        .map(|(letter, &result)| tile(letter, Some(result)).to_string())
        .collect()
}

/// Render the keyboard, one line per row, colored by key state
#[must_use]
pub fn keyboard_lines(keys: &KeyStates) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| tile(letter, keys.get(letter as u8)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
