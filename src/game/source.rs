//! The word source
//!
//! Holds the fixed list of playable words, answers membership queries and
//! picks session targets either at random or deterministically per date.

use super::session::Session;
use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Fatal problems with the configured word list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word list contains no valid five-letter words")]
    EmptyWordList,
}

/// How a new session chooses its target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetMode {
    /// Uniformly random word from the list
    Random,
    /// Same word for everyone on the given day (`YYYY-MM-DD`)
    Daily { date_key: String },
}

/// Fixed, non-empty set of valid words
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl WordSource {
    /// Build a source from raw strings
    ///
    /// Entries are lowercased; malformed entries and duplicates are skipped
    /// (first occurrence wins, so list order is otherwise preserved).
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` if no valid word remains.
    pub fn new<I, S>(raw: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut lookup = FxHashSet::default();
        let mut skipped = 0usize;

        for entry in raw {
            let entry = entry.as_ref().trim();
            match Word::new(entry) {
                Ok(word) => {
                    if lookup.insert(word.clone()) {
                        words.push(word);
                    }
                }
                Err(e) => {
                    skipped += 1;
                    log::trace!("skipping word list entry {entry:?}: {e}");
                }
            }
        }

        if skipped > 0 {
            log::warn!("skipped {skipped} malformed word list entries");
        }
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        log::debug!("word source ready with {} words", words.len());
        Ok(Self { words, lookup })
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in list order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// True iff `s` is five letters and in the list (case-insensitive)
    #[must_use]
    pub fn is_valid_word(&self, s: &str) -> bool {
        Word::new(s).is_ok_and(|word| self.contains(&word))
    }

    /// Membership test for an already-parsed word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Pick a target uniformly at random
    pub fn pick_random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Pick the target for a calendar day
    ///
    /// The same `date_key` always yields the same word for a given list.
    #[must_use]
    pub fn pick_deterministic_target(&self, date_key: &str) -> &Word {
        &self.words[daily_index(date_key, self.words.len())]
    }

    /// Resolve the target for `mode`
    pub fn pick_target<R: Rng + ?Sized>(&self, mode: &TargetMode, rng: &mut R) -> &Word {
        let target = match mode {
            TargetMode::Random => self.pick_random_target(rng),
            TargetMode::Daily { date_key } => self.pick_deterministic_target(date_key),
        };
        log::debug!("target selected for {mode:?}");
        target
    }

    /// Start a fresh session whose target is chosen by `mode`
    pub fn new_session<R: Rng + ?Sized>(&self, mode: &TargetMode, rng: &mut R) -> Session<'_> {
        let target = self.pick_target(mode, rng).clone();
        Session::new(self, target)
    }
}

/// Stable list index for a date string
///
/// Order-sensitive string hash over UTF-16 code units:
/// `hash = hash * 31 + unit (mod 2^32)`, starting from 0, then `hash % len`.
///
/// # Panics
/// Panics if `len` is zero.
#[must_use]
pub fn daily_index(date_key: &str, len: usize) -> usize {
    let hash = date_key
        .encode_utf16()
        .fold(0u32, |hash, unit| hash.wrapping_mul(31).wrapping_add(u32::from(unit)));
    hash as usize % len
}
