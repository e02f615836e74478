//! Word list loading utilities
//!
//! Builds a [`WordSource`] from a file or from the embedded list.

use super::WORDS;
use crate::game::{ConfigError, WordSource};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to produce a usable word source from a file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Load a word source from a file with one word per line
///
/// Blank lines are ignored; malformed lines are skipped by [`WordSource::new`].
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::Config` if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let source = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", source.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordSource, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("loading word list from {}", path.display());
    let source = WordSource::new(content.lines().filter(|line| !line.trim().is_empty()))?;
    Ok(source)
}

/// Word source over the list compiled into the binary
///
/// # Errors
///
/// Returns `ConfigError::EmptyWordList` only if the build shipped an empty list.
pub fn embedded_source() -> Result<WordSource, ConfigError> {
    WordSource::new(WORDS.iter().copied())
}
