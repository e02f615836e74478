//! Word Guess
//!
//! A Wordle-style word guessing game: a secret five-letter target, six
//! attempts, and per-letter feedback with correct duplicate-letter handling.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_game::game::{Status, TargetMode, WordSource};
//!
//! let source = WordSource::new(["apple", "grape", "light"]).unwrap();
//! let mode = TargetMode::Daily { date_key: "2024-01-01".into() };
//! let mut session = source.new_session(&mode, &mut StdRng::seed_from_u64(0));
//!
//! for ch in "grape".chars() {
//!     session.type_letter(ch);
//! }
//! let feedback = session.submit().unwrap();
//! println!("{feedback}");
//! assert_eq!(session.attempts().len(), 1);
//! assert!(session.status() == Status::InProgress || feedback.is_win());
//! ```

// Core domain types
pub mod core;

// Word source and per-game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Statistics and daily progress persistence
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
