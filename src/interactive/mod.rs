//! Interactive TUI interface
//!
//! Full-screen game with a board, on-screen keyboard and message panel.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
