//! Feedback check command
//!
//! Scores a single guess against a chosen target without playing a game.

use crate::core::{Feedback, Word};
use crate::game::WordSource;
use anyhow::{Context, Result};

/// Result of checking one guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
    /// Whether the guess would be accepted in a game
    pub guess_in_list: bool,
}

/// Evaluate `guess` against `target`
///
/// Words outside the list are still scored; `guess_in_list` reports whether
/// a game would have accepted the guess.
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn check_guess(guess: &str, target: &str, source: &WordSource) -> Result<CheckResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("invalid target '{target}'"))?;

    Ok(CheckResult {
        feedback: Feedback::evaluate(&guess, &target),
        guess_in_list: source.contains(&guess),
        guess,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellResult::{Correct, Present};

    #[test]
    fn check_scores_duplicates() {
        let source = WordSource::new(["aabbc", "abcab"]).unwrap();
        let result = check_guess("AABBC", "abcab", &source).unwrap();
        assert_eq!(
            result.feedback.cells(),
            &[Correct, Present, Present, Present, Present]
        );
        assert!(result.guess_in_list);
    }

    #[test]
    fn check_reports_unknown_guess() {
        let source = WordSource::new(["apple"]).unwrap();
        let result = check_guess("zzzzz", "apple", &source).unwrap();
        assert!(!result.guess_in_list);
    }

    #[test]
    fn check_rejects_malformed_words() {
        let source = WordSource::new(["apple"]).unwrap();
        assert!(check_guess("app", "apple", &source).is_err());
        assert!(check_guess("apple", "appl3", &source).is_err());
    }
}
