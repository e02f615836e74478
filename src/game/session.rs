//! Per-game state machine
//!
//! A [`Session`] owns everything about one game: the target, the guesses
//! submitted so far, and the row currently being typed. Evaluations and
//! keyboard state are always derived from `(guess, target)` on demand.

use super::source::WordSource;
use crate::core::{Feedback, KeyStates, WORD_LEN, Word, WordError};
use thiserror::Error;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Recoverable submission failures
///
/// The session is left exactly as it was, input included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("guess must be {len} letters, got {0}", len = WORD_LEN)]
    InvalidLength(usize),
    #[error("'{0}' must contain only letters")]
    InvalidCharacters(String),
    #[error("'{0}' is not in the word list")]
    NotInWordList(String),
    #[error("the game is already over")]
    GameOver,
}

/// One game in progress (or finished)
#[derive(Debug, Clone)]
pub struct Session<'a> {
    source: &'a WordSource,
    target: Word,
    max_attempts: usize,
    attempts: Vec<Word>,
    current_input: String,
    status: Status,
}

impl<'a> Session<'a> {
    /// Start a game against `target` with the standard six attempts
    #[must_use]
    pub const fn new(source: &'a WordSource, target: Word) -> Self {
        Self {
            source,
            target,
            max_attempts: MAX_ATTEMPTS,
            attempts: Vec::new(),
            current_input: String::new(),
            status: Status::InProgress,
        }
    }

    /// Override the attempt limit
    ///
    /// A game still in progress always keeps at least one attempt beyond
    /// those already made. A finished game keeps its limit.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        if self.status == Status::InProgress {
            self.max_attempts = max_attempts.max(self.attempts.len() + 1);
        }
        self
    }

    /// Rebuild a session by replaying previously submitted guesses
    ///
    /// Replay stops early if a guess ends the game.
    ///
    /// # Errors
    /// Returns the first `SubmitError` raised by a saved guess.
    pub fn restore<S: AsRef<str>>(
        source: &'a WordSource,
        target: Word,
        guesses: &[S],
    ) -> Result<Self, SubmitError> {
        let mut session = Self::new(source, target);
        for guess in guesses {
            if session.status.is_terminal() {
                break;
            }
            let text = guess.as_ref();
            let word = Word::new(text).map_err(|e| match e {
                WordError::InvalidLength(len) => SubmitError::InvalidLength(len),
                WordError::InvalidCharacters => SubmitError::InvalidCharacters(text.to_string()),
            })?;
            session.current_input = word.text().to_string();
            session.submit()?;
        }
        Ok(session)
    }

    /// Append a letter to the current row
    ///
    /// Returns `false` (and changes nothing) if the game is over, the row is
    /// full, or `ch` is not an ASCII letter.
    pub fn type_letter(&mut self, ch: char) -> bool {
        if self.status.is_terminal()
            || self.current_input.len() >= WORD_LEN
            || !ch.is_ascii_alphabetic()
        {
            return false;
        }
        self.current_input.push(ch.to_ascii_lowercase());
        true
    }

    /// Remove the last letter of the current row
    ///
    /// Returns `false` if the game is over or the row is empty.
    pub fn backspace(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.current_input.pop().is_some()
    }

    /// Submit the current row as a guess
    ///
    /// On success the row is cleared, the guess is recorded and the status
    /// advances to `Won` or `Lost` where appropriate.
    ///
    /// # Errors
    /// - `GameOver` if the session is already terminal
    /// - `InvalidLength` if the row is not five letters
    /// - `NotInWordList` if the word is unknown
    pub fn submit(&mut self) -> Result<Feedback, SubmitError> {
        if self.status.is_terminal() {
            return Err(SubmitError::GameOver);
        }
        if self.current_input.len() != WORD_LEN {
            return Err(SubmitError::InvalidLength(self.current_input.len()));
        }

        let guess = Word::new(&self.current_input)
            .map_err(|_| SubmitError::InvalidLength(self.current_input.len()))?;
        if !self.source.contains(&guess) {
            log::trace!("rejected guess {guess}: not in word list");
            return Err(SubmitError::NotInWordList(guess.text().to_string()));
        }

        let feedback = Feedback::evaluate(&guess, &self.target);
        self.attempts.push(guess);
        self.current_input.clear();

        if feedback.is_win() {
            self.status = Status::Won;
        } else if self.attempts.len() >= self.max_attempts {
            self.status = Status::Lost;
        }
        log::trace!(
            "attempt {}/{} scored {feedback}, status {:?}",
            self.attempts.len(),
            self.max_attempts,
            self.status
        );

        Ok(feedback)
    }

    /// Best-known result for each guessed letter
    #[must_use]
    pub fn key_states(&self) -> KeyStates {
        let mut keys = KeyStates::new();
        for (guess, feedback) in self.evaluations() {
            keys.record(guess, &feedback);
        }
        keys
    }

    /// Submitted guesses paired with their evaluation, oldest first
    pub fn evaluations(&self) -> impl Iterator<Item = (&Word, Feedback)> + '_ {
        self.attempts
            .iter()
            .map(|guess| (guess, Feedback::evaluate(guess, &self.target)))
    }

    /// Render the spoiler-free share block
    ///
    /// ```text
    /// <title> <date>
    /// <attempts>/<max>
    ///
    /// 🟨⬛⬛⬛🟩
    /// 🟩🟩🟩🟩🟩
    /// ```
    #[must_use]
    pub fn share_text(&self, title: &str, date: &str) -> String {
        let grid: Vec<String> = self
            .evaluations()
            .map(|(_, feedback)| feedback.to_string())
            .collect();
        format!(
            "{title} {date}\n{}/{}\n\n{}",
            self.attempts.len(),
            self.max_attempts,
            grid.join("\n")
        )
    }

    /// The secret word (hosts should only reveal it once the game is over)
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[Word] {
        &self.attempts
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellResult::{Absent, Correct, Present};

    fn source() -> WordSource {
        WordSource::new(["apple", "grape", "light", "crane", "slate", "aabbc", "abcab"]).unwrap()
    }

    fn session<'a>(source: &'a WordSource, target: &str) -> Session<'a> {
        Session::new(source, Word::new(target).unwrap())
    }

    fn type_word(session: &mut Session<'_>, word: &str) {
        for ch in word.chars() {
            session.type_letter(ch);
        }
    }

    fn guess(session: &mut Session<'_>, word: &str) -> Result<Feedback, SubmitError> {
        type_word(session, word);
        session.submit()
    }

    #[test]
    fn new_session_starts_in_progress() {
        let words = source();
        let game = session(&words, "apple");
        assert_eq!(game.status(), Status::InProgress);
        assert!(game.attempts().is_empty());
        assert_eq!(game.current_input(), "");
        assert_eq!(game.max_attempts(), MAX_ATTEMPTS);
        assert_eq!(game.remaining_attempts(), 6);
    }

    #[test]
    fn typing_lowercases_and_caps_at_five() {
        let words = source();
        let mut game = session(&words, "apple");
        assert!(game.type_letter('G'));
        type_word(&mut game, "rapes");
        assert_eq!(game.current_input(), "grape");
        assert!(!game.type_letter('x'));
        assert_eq!(game.current_input(), "grape");
    }

    #[test]
    fn typing_ignores_non_letters() {
        let words = source();
        let mut game = session(&words, "apple");
        assert!(!game.type_letter('1'));
        assert!(!game.type_letter(' '));
        assert!(!game.type_letter('é'));
        assert_eq!(game.current_input(), "");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let words = source();
        let mut game = session(&words, "apple");
        assert!(!game.backspace());
        type_word(&mut game, "gr");
        assert!(game.backspace());
        assert_eq!(game.current_input(), "g");
    }

    #[test]
    fn submit_short_input_is_invalid_length() {
        let words = source();
        let mut game = session(&words, "apple");
        assert_eq!(guess(&mut game, "gra"), Err(SubmitError::InvalidLength(3)));
        assert_eq!(game.current_input(), "gra");
        assert!(game.attempts().is_empty());
    }

    #[test]
    fn submit_unknown_word_keeps_state() {
        let words = source();
        let mut game = session(&words, "apple");
        assert_eq!(
            guess(&mut game, "zzzzz"),
            Err(SubmitError::NotInWordList("zzzzz".to_string()))
        );
        assert!(game.attempts().is_empty());
        assert_eq!(game.current_input(), "zzzzz");
        assert_eq!(game.status(), Status::InProgress);

        // Player can correct and continue
        for _ in 0..5 {
            game.backspace();
        }
        assert!(guess(&mut game, "grape").is_ok());
        assert_eq!(game.attempts().len(), 1);
    }

    #[test]
    fn win_after_three_attempts() {
        let words = WordSource::new(["apple", "grape", "light"]).unwrap();
        let mut game = session(&words, "apple");

        let first = guess(&mut game, "grape").unwrap();
        assert_ne!(first.cells()[0], Correct);
        assert_eq!(first.cells(), &[Absent, Absent, Present, Present, Correct]);
        assert_eq!(game.status(), Status::InProgress);

        let second = guess(&mut game, "light").unwrap();
        assert_eq!(second.cells(), &[Present, Absent, Absent, Absent, Absent]);
        assert_eq!(game.status(), Status::InProgress);

        let third = guess(&mut game, "apple").unwrap();
        assert!(third.is_win());
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.attempts().len(), 3);
        assert_eq!(game.current_input(), "");
    }

    #[test]
    fn lose_after_max_attempts() {
        let words = source();
        let mut game = session(&words, "apple");
        for _ in 0..MAX_ATTEMPTS {
            assert_eq!(game.status(), Status::InProgress);
            guess(&mut game, "grape").unwrap();
        }
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.attempts().len(), MAX_ATTEMPTS);
        assert_eq!(game.remaining_attempts(), 0);
    }

    #[test]
    fn win_on_last_attempt_is_won() {
        let words = source();
        let mut game = session(&words, "apple").with_max_attempts(2);
        guess(&mut game, "grape").unwrap();
        guess(&mut game, "apple").unwrap();
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn terminal_session_is_frozen() {
        let words = source();
        let mut game = session(&words, "apple");
        guess(&mut game, "apple").unwrap();
        assert_eq!(game.status(), Status::Won);

        assert!(!game.type_letter('a'));
        assert!(!game.backspace());
        assert_eq!(game.submit(), Err(SubmitError::GameOver));
        assert_eq!(game.attempts().len(), 1);
        assert_eq!(game.current_input(), "");
    }

    #[test]
    fn attempts_never_exceed_max() {
        let words = source();
        let mut game = session(&words, "apple").with_max_attempts(3);
        for _ in 0..10 {
            let _ = guess(&mut game, "light");
            assert!(game.attempts().len() <= game.max_attempts());
        }
        assert_eq!(game.status(), Status::Lost);
    }

    #[test]
    fn key_states_follow_attempts() {
        let words = source();
        let mut game = session(&words, "apple");
        guess(&mut game, "apple").unwrap();
        let keys = game.key_states();
        assert_eq!(keys.get(b'a'), Some(Correct));
        assert_eq!(keys.get(b'p'), Some(Correct));
        assert_eq!(keys.get(b'z'), None);
    }

    #[test]
    fn key_states_never_downgrade_across_attempts() {
        let words = source();
        let mut game = session(&words, "crane");
        guess(&mut game, "grape").unwrap(); // 'a' exact at index 2
        assert_eq!(game.key_states().get(b'a'), Some(Correct));
        guess(&mut game, "apple").unwrap(); // 'a' only present this time
        assert_eq!(game.key_states().get(b'a'), Some(Correct));
        assert_eq!(game.key_states().get(b'p'), Some(Absent));
    }

    #[test]
    fn evaluations_derived_from_target() {
        let words = source();
        let mut game = session(&words, "abcab");
        guess(&mut game, "aabbc").unwrap();
        let rows: Vec<_> = game.evaluations().collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.text(), "aabbc");
        assert_eq!(
            rows[0].1.cells(),
            &[Correct, Present, Present, Present, Present]
        );
    }

    #[test]
    fn share_text_format() {
        let words = WordSource::new(["apple", "grape", "light"]).unwrap();
        let mut game = session(&words, "apple");
        guess(&mut game, "grape").unwrap();
        guess(&mut game, "apple").unwrap();

        assert_eq!(
            game.share_text("Word Guess", "2024-01-01"),
            "Word Guess 2024-01-01\n2/6\n\n⬛⬛🟨🟨🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_text_without_attempts() {
        let words = source();
        let game = session(&words, "apple");
        assert_eq!(game.share_text("Word Guess", "2024-01-01"), "Word Guess 2024-01-01\n0/6\n\n");
    }

    #[test]
    fn restore_replays_guesses() {
        let words = source();
        let game = Session::restore(&words, Word::new("apple").unwrap(), &["grape", "light"]).unwrap();
        assert_eq!(game.attempts().len(), 2);
        assert_eq!(game.status(), Status::InProgress);

        let done =
            Session::restore(&words, Word::new("apple").unwrap(), &["apple", "grape"]).unwrap();
        assert_eq!(done.status(), Status::Won);
        assert_eq!(done.attempts().len(), 1);
    }

    #[test]
    fn restore_rejects_malformed_saved_guesses() {
        let words = source();
        let target = Word::new("apple").unwrap();
        assert_eq!(
            Session::restore(&words, target.clone(), &["grapes"]).unwrap_err(),
            SubmitError::InvalidLength(6)
        );
        assert_eq!(
            SubmitError::InvalidLength(6).to_string(),
            "guess must be 5 letters, got 6"
        );
        assert_eq!(
            Session::restore(&words, target, &["grape", "l!ght"]).unwrap_err(),
            SubmitError::InvalidCharacters("l!ght".to_string())
        );
    }

    #[test]
    fn shrinking_limit_keeps_room_for_next_guess() {
        let words = source();
        let mut game =
            Session::restore(&words, Word::new("apple").unwrap(), &["grape", "light", "grape"])
                .unwrap()
                .with_max_attempts(2);
        assert_eq!(game.max_attempts(), 4);
        assert_eq!(game.remaining_attempts(), 1);
        assert_eq!(game.status(), Status::InProgress);

        guess(&mut game, "light").unwrap();
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.remaining_attempts(), 0);
    }

    #[test]
    fn finished_game_keeps_its_limit() {
        let words = source();
        let game = Session::restore(&words, Word::new("apple").unwrap(), &["apple"])
            .unwrap()
            .with_max_attempts(1);
        assert_eq!(game.max_attempts(), MAX_ATTEMPTS);
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn restore_rejects_unknown_guess() {
        let words = source();
        let result = Session::restore(&words, Word::new("apple").unwrap(), &["zzzzz"]);
        assert_eq!(
            result.unwrap_err(),
            SubmitError::NotInWordList("zzzzz".to_string())
        );
    }
}
