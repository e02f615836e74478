//! Persistent statistics and daily progress
//!
//! Everything is stored in one JSON file: lifetime statistics plus the
//! guesses of the most recent daily puzzle, keyed by its date.

use crate::game::{MAX_ATTEMPTS, Session, Status};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corrupt save file {}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Lifetime results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub played: u32,
    pub won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by number of attempts used (index 0 = solved in one)
    pub distribution: [u32; MAX_ATTEMPTS],
}

impl Statistics {
    pub fn record_win(&mut self, attempts: usize) {
        self.played += 1;
        self.won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        if let Some(slot) = attempts
            .checked_sub(1)
            .and_then(|i| self.distribution.get_mut(i))
        {
            *slot += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.played += 1;
        self.current_streak = 0;
    }

    /// Record a finished session; in-progress sessions are ignored
    pub fn record_session(&mut self, session: &Session<'_>) {
        match session.status() {
            Status::Won => self.record_win(session.attempts().len()),
            Status::Lost => self.record_loss(),
            Status::InProgress => {}
        }
    }

    /// Percentage of games won (0 when nothing has been played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }
}

/// Guesses made on one day's puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    pub guesses: Vec<String>,
    /// Whether the finished game has been counted in [`Statistics`]
    #[serde(default)]
    pub recorded: bool,
}

impl DailyRecord {
    /// Snapshot the guesses of a daily session
    #[must_use]
    pub fn from_session(date: &str, session: &Session<'_>) -> Self {
        Self {
            date: date.to_string(),
            guesses: session
                .attempts()
                .iter()
                .map(|w| w.text().to_string())
                .collect(),
            recorded: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SaveFile {
    #[serde(default)]
    stats: Statistics,
    #[serde(default)]
    daily: Option<DailyRecord>,
}

/// JSON-backed store for [`Statistics`] and the current [`DailyRecord`]
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    data: SaveFile,
}

impl StatsStore {
    /// Default save location under the platform data directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("wordle_game").join("stats.json"))
    }

    /// Open the store at `path`, starting empty if the file does not exist
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StoreError::Format {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no save file at {}, starting fresh", path.display());
                SaveFile::default()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self { path, data })
    }

    /// Write the store back to disk, creating parent directories as needed
    ///
    /// # Errors
    /// Returns `StoreError::Io` on any filesystem failure.
    pub fn save(&self) -> Result<(), StoreError> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.data).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)?;
        log::debug!("saved statistics to {}", self.path.display());
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.data.stats
    }

    pub fn stats_mut(&mut self) -> &mut Statistics {
        &mut self.data.stats
    }

    /// Saved progress for `date`, if the stored daily record is for that day
    #[must_use]
    pub fn daily_for(&self, date: &str) -> Option<&DailyRecord> {
        self.data.daily.as_ref().filter(|record| record.date == date)
    }

    /// Save progress on a daily session, counting it in the statistics the
    /// first time it is seen finished
    pub fn update_daily(&mut self, date: &str, session: &Session<'_>) {
        let already_recorded = self.daily_for(date).is_some_and(|record| record.recorded);
        let mut record = DailyRecord::from_session(date, session);
        record.recorded = already_recorded;

        if session.status().is_terminal() && !already_recorded {
            self.data.stats.record_session(session);
            record.recorded = true;
        }
        self.data.daily = Some(record);
    }
}
