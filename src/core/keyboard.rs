//! On-screen keyboard state
//!
//! Tracks the best result seen for every letter across submitted guesses.

use super::feedback::{CellResult, Feedback};
use super::word::Word;

const ALPHABET: usize = 26;

/// Best-known [`CellResult`] per letter
///
/// Entries only ever move up the `Absent < Present < Correct` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStates {
    states: [Option<CellResult>; ALPHABET],
}

impl KeyStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the keyboard
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &result) in guess.chars().iter().zip(feedback.cells()) {
            self.upgrade(letter, result);
        }
    }

    /// Raise `letter` to `result` unless it already holds something better
    pub fn upgrade(&mut self, letter: u8, result: CellResult) {
        if let Some(slot) = Self::index(letter).map(|i| &mut self.states[i]) {
            *slot = Some(slot.map_or(result, |current| current.max(result)));
        }
    }

    /// Best result seen for `letter`, or `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<CellResult> {
        Self::index(letter).and_then(|i| self.states[i])
    }

    /// Guessed letters and their states, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, CellResult)> + '_ {
        self.states
            .iter()
            .zip('a'..='z')
            .filter_map(|(state, letter)| state.map(|s| (letter, s)))
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_lowercase() - b'a'))
    }
}
