//! Session setup and bookkeeping shared by the play front-ends

use crate::game::{Session, TargetMode, WordSource};
use crate::stats::{StatsStore, StoreError};
use rand::Rng;

/// Title used in share text
pub const DEFAULT_TITLE: &str = "Word Guess";

/// How a front-end should run its games
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub title: String,
    /// Calendar date used for daily targets and share headers (`YYYY-MM-DD`)
    pub date: String,
    pub daily: bool,
}

impl PlayConfig {
    #[must_use]
    pub fn new(date: impl Into<String>, daily: bool) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            date: date.into(),
            daily,
        }
    }

    /// Target mode for the first game
    #[must_use]
    pub fn mode(&self) -> TargetMode {
        if self.daily {
            TargetMode::Daily {
                date_key: self.date.clone(),
            }
        } else {
            TargetMode::Random
        }
    }
}

/// Start the first game, resuming saved daily progress when there is some
pub fn start_session<'a, R: Rng + ?Sized>(
    source: &'a WordSource,
    config: &PlayConfig,
    store: Option<&StatsStore>,
    rng: &mut R,
) -> Session<'a> {
    let mode = config.mode();
    let saved = store
        .filter(|_| config.daily)
        .and_then(|store| store.daily_for(&config.date));

    if let Some(record) = saved {
        let target = source.pick_target(&mode, rng).clone();
        match Session::restore(source, target, &record.guesses) {
            Ok(session) => {
                log::info!(
                    "resumed daily puzzle {} after {} guesses",
                    config.date,
                    session.attempts().len()
                );
                return session;
            }
            Err(e) => log::warn!("discarding saved daily progress: {e}"),
        }
    }

    source.new_session(&mode, rng)
}

/// Start a follow-up game; always random so a finished daily is not replayed
pub fn next_session<'a, R: Rng + ?Sized>(source: &'a WordSource, rng: &mut R) -> Session<'a> {
    source.new_session(&TargetMode::Random, rng)
}

/// Persist progress after a successful submission
///
/// Daily games are saved every turn; random games only count once finished.
///
/// # Errors
/// Returns `StoreError` if the store cannot be written.
pub fn record_progress(
    store: &mut StatsStore,
    session: &Session<'_>,
    is_daily: bool,
    date: &str,
) -> Result<(), StoreError> {
    if is_daily {
        store.update_daily(date, session);
    } else if session.status().is_terminal() {
        store.stats_mut().record_session(session);
    } else {
        return Ok(());
    }
    store.save()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Status;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn source() -> WordSource {
        WordSource::new(["apple", "grape", "light", "crane", "slate"]).unwrap()
    }

    fn submit(session: &mut Session<'_>, word: &str) {
        for ch in word.chars() {
            session.type_letter(ch);
        }
        session.submit().unwrap();
    }

    #[test]
    fn daily_config_uses_date_target() {
        let words = source();
        let config = PlayConfig::new("2024-01-01", true);
        let session = start_session(&words, &config, None, &mut StdRng::seed_from_u64(1));
        assert_eq!(session.target(), words.pick_deterministic_target("2024-01-01"));
    }

    #[test]
    fn random_config_is_reproducible_with_seed() {
        let words = source();
        let config = PlayConfig::new("2024-01-01", false);
        let a = start_session(&words, &config, None, &mut StdRng::seed_from_u64(9));
        let b = start_session(&words, &config, None, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.target(), b.target());
    }

    #[test]
    fn daily_progress_resumes_from_store() {
        let dir = tempfile::tempdir().unwrap();
        let words = source();
        let config = PlayConfig::new("2024-01-01", true);
        let mut rng = StdRng::seed_from_u64(3);
        let mut store = StatsStore::open(dir.path().join("stats.json")).unwrap();

        let mut session = start_session(&words, &config, Some(&store), &mut rng);
        let guess = if session.target().text() == "light" { "grape" } else { "light" };
        submit(&mut session, guess);
        record_progress(&mut store, &session, true, &config.date).unwrap();

        let reopened = StatsStore::open(store.path()).unwrap();
        let resumed = start_session(&words, &config, Some(&reopened), &mut rng);
        assert_eq!(resumed.attempts().len(), 1);
        assert_eq!(resumed.attempts()[0].text(), guess);
        assert_eq!(resumed.status(), Status::InProgress);
    }

    #[test]
    fn other_days_progress_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let words = source();
        let mut store = StatsStore::open(dir.path().join("stats.json")).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let yesterday = PlayConfig::new("2024-01-01", true);
        let mut session = start_session(&words, &yesterday, Some(&store), &mut rng);
        submit(&mut session, "crane");
        record_progress(&mut store, &session, true, &yesterday.date).unwrap();

        let today = PlayConfig::new("2024-01-02", true);
        let fresh = start_session(&words, &today, Some(&store), &mut rng);
        assert!(fresh.attempts().is_empty());
    }

    #[test]
    fn random_games_recorded_only_when_finished() {
        let dir = tempfile::tempdir().unwrap();
        let words = source();
        let mut store = StatsStore::open(dir.path().join("stats.json")).unwrap();
        let target = words.words()[0].clone();
        let mut session = Session::new(&words, target.clone());

        submit(&mut session, if target.text() == "grape" { "light" } else { "grape" });
        record_progress(&mut store, &session, false, "2024-01-01").unwrap();
        assert_eq!(store.stats().played, 0);

        submit(&mut session, target.text());
        record_progress(&mut store, &session, false, "2024-01-01").unwrap();
        assert_eq!(store.stats().played, 1);
        assert_eq!(store.stats().won, 1);
    }
}
