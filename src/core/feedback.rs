//! Guess evaluation
//!
//! Each letter of a guess is scored against the target as one of three
//! [`CellResult`]s. A full row of five results is a [`Feedback`].
//!
//! Repeated letters are budgeted: a letter is never credited (as Correct or
//! Present) more times than it occurs in the target, and exact-position
//! matches claim their share of the budget before anything else.

use super::word::{WORD_LEN, Word};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome for a single letter position
///
/// Ordered by how much it reveals: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CellResult {
    /// Letter does not occur in the target (or its occurrences are used up)
    Absent,
    /// Letter occurs in the target at another position
    Present,
    /// Letter is in the right position
    Correct,
}

impl CellResult {
    /// Share-grid symbol for this result
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Evaluation of one guess against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback([CellResult; WORD_LEN]);

impl Feedback {
    /// All five letters correct
    pub const PERFECT: Self = Self([CellResult::Correct; WORD_LEN]);

    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and take them out of the
    ///    target's letter counts
    /// 2. Second pass: for every other position, mark Present while the
    ///    letter still has count left (consuming one), otherwise Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{CellResult::*, Feedback, Word};
    ///
    /// let guess = Word::new("aabbc").unwrap();
    /// let target = Word::new("abcab").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.cells(), &[Correct, Present, Present, Present, Present]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut cells = [CellResult::Absent; WORD_LEN];
        let mut remaining = target.char_counts();

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                cells[i] = CellResult::Correct;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (cell, &letter) in cells.iter_mut().zip(guess.chars()) {
            if *cell == CellResult::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                *cell = CellResult::Present;
                *count -= 1;
            }
        }

        Self(cells)
    }

    /// Per-position results
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[CellResult; WORD_LEN] {
        &self.0
    }

    /// True when every position is Correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of positions with the given result
    #[must_use]
    pub fn count(&self, result: CellResult) -> usize {
        self.0.iter().filter(|&&cell| cell == result).count()
    }

    /// Render as a share-grid line such as `🟩🟨⬛⬛🟩`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|cell| cell.symbol()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse a row like `"GY-G-"` or `"🟩🟨⬛🟩⬜"`
    ///
    /// Accepts `G`/`g`/🟩 for Correct, `Y`/`y`/🟨 for Present and
    /// `-`/`_`/⬛/⬜ for Absent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut cells = [CellResult::Absent; WORD_LEN];
        for (cell, ch) in cells.iter_mut().zip(chars) {
            *cell = match ch {
                'G' | 'g' | '🟩' => CellResult::Correct,
                'Y' | 'y' | '🟨' => CellResult::Present,
                '-' | '_' | '⬛' | '⬜' => CellResult::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::CellResult::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, target: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn cell_result_ordering() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn all_absent() {
        let feedback = eval("abcde", "fghij");
        assert_eq!(feedback.count(Absent), 5);
        assert_eq!(feedback.to_emoji(), "⬛⬛⬛⬛⬛");
    }

    #[test]
    fn self_evaluation_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "eerie"] {
            let feedback = eval(word, word);
            assert!(feedback.is_win());
            assert_eq!(feedback, Feedback::PERFECT);
        }
    }

    #[test]
    fn duplicate_letters_budgeted_by_target_count() {
        // Target counts {a:2, b:2, c:1}
        assert_eq!(
            eval("aabbc", "abcab").cells(),
            &[Correct, Present, Present, Present, Present]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_present() {
        // FLOOR has two o's: one exact at index 3, one left for index 1
        assert_eq!(
            eval("robot", "floor").cells(),
            &[Present, Present, Absent, Correct, Absent]
        );
        assert_eq!(
            eval("llama", "hello").cells(),
            &[Present, Present, Absent, Absent, Absent]
        );
        // GOLLY has two l's, both claimed by exact matches
        assert_eq!(
            eval("lolly", "golly").cells(),
            &[Absent, Correct, Correct, Correct, Correct]
        );
    }

    #[test]
    fn repeated_guess_letter_not_over_credited() {
        // SPEED vs ERASE: both e's present, target has two
        assert_eq!(
            eval("speed", "erase").cells(),
            &[Present, Absent, Present, Present, Absent]
        );
        // GEESE vs THEME: both target e's are used up by exact matches
        assert_eq!(
            eval("geese", "theme").cells(),
            &[Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn credited_letters_never_exceed_target_count() {
        let words = ["eerie", "geese", "speed", "llama", "abcab", "aabbc", "sassy"];
        for guess in words {
            for target in words {
                let g = Word::new(guess).unwrap();
                let t = Word::new(target).unwrap();
                let feedback = Feedback::evaluate(&g, &t);
                let target_counts = t.char_counts();
                for (&letter, &budget) in &target_counts {
                    let credited = g
                        .chars()
                        .iter()
                        .zip(feedback.cells())
                        .filter(|&(&l, &c)| l == letter && c != Absent)
                        .count();
                    assert!(credited <= usize::from(budget), "{guess} vs {target}");
                }
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        assert_eq!(eval("crane", "slate"), eval("crane", "slate"));
        assert_eq!(
            eval("crane", "slate").cells(),
            &[Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn parse_feedback_strings() {
        let p1: Feedback = "GYG--".parse().unwrap();
        let p2: Feedback = "🟩🟨🟩⬛⬜".parse().unwrap();
        let p3: Feedback = "gyg__".parse().unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.count(Correct), 2);
        assert_eq!(p1.count(Present), 1);
    }

    #[test]
    fn parse_feedback_invalid() {
        assert!("GYGGYX".parse::<Feedback>().is_err());
        assert!("GYG".parse::<Feedback>().is_err());
        assert!("GXGGY".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }
}
