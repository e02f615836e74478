//! Core domain types for the game
//!
//! Pure value types with no I/O: words, per-letter results, and keyboard state.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{CellResult, Feedback};
pub use keyboard::KeyStates;
pub use word::{WORD_LEN, Word, WordError};
