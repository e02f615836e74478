//! TUI application state and logic

use crate::commands::{PlayConfig, next_session, record_progress, start_session};
use crate::game::{Session, Status, WordSource};
use crate::stats::{Statistics, StatsStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Most messages kept in the panel
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<'a> {
    pub source: &'a WordSource,
    pub session: Session<'a>,
    pub config: PlayConfig,
    pub is_daily: bool,
    pub store: Option<StatsStore>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        source: &'a WordSource,
        config: PlayConfig,
        store: Option<StatsStore>,
        mut rng: StdRng,
    ) -> Self {
        let session = start_session(source, &config, store.as_ref(), &mut rng);
        let is_daily = config.daily;

        let mut app = Self {
            source,
            session,
            config,
            is_daily,
            store,
            messages: Vec::new(),
            should_quit: false,
            rng,
        };

        if app.is_daily {
            let text = format!("Daily puzzle for {}", app.config.date);
            app.add_message(&text, MessageStyle::Info);
        }
        app.add_message(
            "Type a word and press Enter. Ctrl-N: new game, Ctrl-S: share, Esc: quit",
            MessageStyle::Info,
        );
        if app.session.status().is_terminal() {
            app.announce_outcome();
        }
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('s') if ctrl => self.show_share(),
            KeyCode::Char(c) if plain => {
                self.session.type_letter(c);
            }
            KeyCode::Backspace => {
                self.session.backspace();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        if self.session.status().is_terminal() {
            self.add_message("Game over! Press Ctrl-N for a new game.", MessageStyle::Info);
            return;
        }

        match self.session.submit() {
            Ok(_) => {
                self.save_progress();
                if self.session.status().is_terminal() {
                    self.announce_outcome();
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session = next_session(self.source, &mut self.rng);
        self.is_daily = false;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn show_share(&mut self) {
        let text = self.share_text();
        self.add_message(&text, MessageStyle::Info);
    }

    #[must_use]
    pub fn share_text(&self) -> String {
        self.session
            .share_text(&self.config.title, &self.config.date)
    }

    /// Lifetime statistics, if a store is attached
    #[must_use]
    pub fn stats(&self) -> Option<&Statistics> {
        self.store.as_ref().map(StatsStore::stats)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn announce_outcome(&mut self) {
        match self.session.status() {
            Status::Won => {
                let attempts = self.session.attempts().len();
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Status::Lost => {
                let text = format!(
                    "You lose! The word was {}",
                    self.session.target().text().to_uppercase()
                );
                self.add_message(&text, MessageStyle::Error);
            }
            Status::InProgress => return,
        }
        self.show_share();
        self.add_message("Press Ctrl-N for a new game or Esc to quit.", MessageStyle::Info);
    }

    fn save_progress(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(e) = record_progress(store, &self.session, self.is_daily, &self.config.date) {
            log::error!("failed to save statistics: {e}");
            self.add_message("Could not save statistics", MessageStyle::Error);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
