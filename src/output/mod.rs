//! Terminal output formatting
//!
//! Display utilities for the simple CLI mode and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_board, print_check_result, print_keyboard, print_stats,
};
