//! Command implementations

pub mod analyze;
pub mod check;
pub mod play;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_guess};
pub use check::{CheckResult, check_guess};
pub use play::{DEFAULT_TITLE, PlayConfig, next_session, record_progress, start_session};
pub use simple::run_simple;
