//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a word and press Enter.

use super::play::{PlayConfig, next_session, record_progress, start_session};
use crate::core::WORD_LEN;
use crate::core::Feedback;
use crate::game::{Session, Status, SubmitError, WordSource};
use crate::output::{print_board, print_keyboard, print_stats};
use crate::stats::StatsStore;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What a line of input asked for
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Share,
    Stats,
    Guess(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        "/quit" | "/q" | "/exit" => Input::Quit,
        "/new" | "/n" => Input::NewGame,
        "/share" | "/s" => Input::Share,
        "/stats" => Input::Stats,
        word => Input::Guess(word.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails. Failures to
/// save statistics are logged and play continues.
pub fn run_simple<R: Rng + ?Sized>(
    source: &WordSource,
    config: &PlayConfig,
    mut store: Option<&mut StatsStore>,
    rng: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Guess - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the {WORD_LEN}-letter word. Type a guess and press Enter.");
    println!("Commands: /new, /share, /stats, /quit\n");

    let mut session = start_session(source, config, store.as_deref(), rng);
    let mut is_daily = config.daily;
    if is_daily {
        println!("📅 Daily puzzle for {}\n", config.date);
    }
    print_board(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}> ", session.attempts().len() + 1);
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };

        match parse_input(&line) {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::NewGame => {
                session = next_session(source, rng);
                is_daily = false;
                println!("\n🔄 New game started!\n");
                print_board(&session);
            }
            Input::Share => {
                println!("\n{}\n", session.share_text(&config.title, &config.date));
            }
            Input::Stats => {
                if let Some(store) = store.as_deref() {
                    print_stats(store.stats());
                } else {
                    println!("Statistics are disabled.");
                }
            }
            Input::Guess(word) => {
                if session.status().is_terminal() {
                    println!("The game is over. Type /new for another round.");
                    continue;
                }
                if !play_guess(&mut session, &word) {
                    continue;
                }

                if let Some(store) = store.as_deref_mut()
                    && let Err(e) = record_progress(store, &session, is_daily, &config.date)
                {
                    log::error!("failed to save statistics: {e:#}");
                }

                print_board(&session);
                print_keyboard(&session.key_states());
                announce_outcome(&session, config);
            }
        }
    }
}

/// Type a whole line into the session and submit it
fn enter_guess(session: &mut Session<'_>, word: &str) -> Result<Feedback, SubmitError> {
    while session.backspace() {}
    if !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(SubmitError::InvalidCharacters(word.to_string()));
    }
    let len = word.chars().count();
    if len != WORD_LEN {
        return Err(SubmitError::InvalidLength(len));
    }

    for ch in word.chars() {
        session.type_letter(ch);
    }
    session.submit()
}

/// Feed one typed word through the session; returns true if it was accepted
fn play_guess(session: &mut Session<'_>, word: &str) -> bool {
    match enter_guess(session, word) {
        Ok(_) => true,
        Err(e) => {
            println!("{}", format!("❌ {e}").red());
            while session.backspace() {}
            false
        }
    }
}

fn announce_outcome(session: &Session<'_>, config: &PlayConfig) {
    match session.status() {
        Status::Won => {
            let attempts = session.attempts().len();
            println!(
                "\n{}",
                format!(
                    "🎉 Solved in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
            println!("\n{}\n", session.share_text(&config.title, &config.date));
            println!("Type /new for another round or /quit to exit.");
        }
        Status::Lost => {
            println!(
                "\n{}",
                format!(
                    "❌ Out of guesses! The word was {}",
                    session.target().text().to_uppercase()
                )
                .red()
                .bold()
            );
            println!("Type /new for another round or /quit to exit.");
        }
        Status::InProgress => {
            println!("{} guesses left\n", session.remaining_attempts());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn parse_commands_and_guesses() {
        assert_eq!(parse_input("/quit"), Input::Quit);
        assert_eq!(parse_input("  /N "), Input::NewGame);
        assert_eq!(parse_input("/share"), Input::Share);
        assert_eq!(parse_input("/stats"), Input::Stats);
        assert_eq!(parse_input("Share"), Input::Guess("share".to_string()));
    }

    #[test]
    fn play_guess_submits_valid_word() {
        colored::control::set_override(false);
        let source = WordSource::new(["apple", "grape"]).unwrap();
        let mut session = Session::new(&source, Word::new("apple").unwrap());
        assert!(play_guess(&mut session, "grape"));
        assert_eq!(session.attempts().len(), 1);
    }

    #[test]
    fn play_guess_rejects_long_and_unknown_words() {
        colored::control::set_override(false);
        let source = WordSource::new(["apple", "grape"]).unwrap();
        let mut session = Session::new(&source, Word::new("apple").unwrap());

        assert!(!play_guess(&mut session, "grapes"));
        assert!(!play_guess(&mut session, "zzzzz"));
        assert!(!play_guess(&mut session, "gr4pe"));
        assert!(session.attempts().is_empty());
        assert_eq!(session.current_input(), "");
        assert_eq!(session.submit(), Err(SubmitError::InvalidLength(0)));
    }

    #[test]
    fn enter_guess_reports_why_a_line_was_rejected() {
        let source = WordSource::new(["apple", "grape"]).unwrap();
        let mut session = Session::new(&source, Word::new("apple").unwrap());

        assert_eq!(
            enter_guess(&mut session, "gr4pe"),
            Err(SubmitError::InvalidCharacters("gr4pe".to_string()))
        );
        assert_eq!(
            enter_guess(&mut session, "grapes"),
            Err(SubmitError::InvalidLength(6))
        );
        assert_eq!(
            enter_guess(&mut session, "zzzzz"),
            Err(SubmitError::NotInWordList("zzzzz".to_string()))
        );
        assert!(enter_guess(&mut session, "grape").is_ok());
        assert_eq!(session.attempts().len(), 1);
    }
}
