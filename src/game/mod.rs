//! Game engine
//!
//! [`WordSource`] owns the word list and target selection; [`Session`] is the
//! per-game state machine that hosts drive with key presses.

mod session;
mod source;

pub use session::{MAX_ATTEMPTS, Session, Status, SubmitError};
pub use source::{ConfigError, TargetMode, WordSource, daily_index};
