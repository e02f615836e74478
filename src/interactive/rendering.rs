//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and status bar for the game.

use super::app::{App, MessageStyle};
use crate::core::{CellResult, KeyStates, WORD_LEN};
use crate::game::{Session, Status};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board + messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, &app.session, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, &app.session.key_states(), chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_daily {
        format!("🟩 {} - Daily {}", app.config.title.to_uppercase(), app.config.date)
    } else {
        format!("🟩 {} - Random Word", app.config.title.to_uppercase())
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background color for a tile or key
const fn result_color(result: Option<CellResult>) -> Color {
    match result {
        Some(CellResult::Correct) => Color::Green,
        Some(CellResult::Present) => Color::Yellow,
        Some(CellResult::Absent) => Color::DarkGray,
        None => Color::Reset,
    }
}

fn tile_span(letter: char, result: Option<CellResult>) -> Span<'static> {
    let style = match result {
        Some(_) => Style::default()
            .fg(Color::Black)
            .bg(result_color(result))
            .add_modifier(Modifier::BOLD),
        None => Style::default().add_modifier(Modifier::BOLD),
    };
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

/// One line per board row: evaluated guesses, the row being typed, then blanks
fn board_lines(session: &Session<'_>) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = session
        .evaluations()
        .map(|(guess, feedback)| {
            let spans: Vec<Span> = guess
                .text()
                .chars()
                .zip(feedback.cells())
                .flat_map(|(letter, &result)| [tile_span(letter, Some(result)), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    if session.status() == Status::InProgress {
        let spans: Vec<Span> = session
            .current_input()
            .chars()
            .chain(std::iter::repeat('·'))
            .take(WORD_LEN)
            .flat_map(|letter| [tile_span(letter, None), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    let blank = Style::default().fg(Color::DarkGray);
    while lines.len() < session.max_attempts() {
        let spans: Vec<Span> = (0..WORD_LEN)
            .flat_map(|_| [Span::styled(" · ", blank), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }
    lines
}

fn render_board(f: &mut Frame, session: &Session<'_>, area: Rect) {
    let mut lines = Vec::new();
    for line in board_lines(session) {
        lines.push(line);
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// Unguessed keys get a neutral background so the keyboard reads as keys
fn key_span(letter: char, result: Option<CellResult>) -> Span<'static> {
    match result {
        Some(_) => tile_span(letter, result),
        None => Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
    }
}

fn keyboard_line(row: &str, keys: &KeyStates) -> Line<'static> {
    let spans: Vec<Span> = row
        .chars()
        .flat_map(|letter| [key_span(letter, keys.get(letter as u8)), Span::raw(" ")])
        .collect();
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, keys: &KeyStates, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| keyboard_line(row, keys))
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Text::from(msg.text.clone())).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let session = &app.session;
    let status_text = match session.status() {
        Status::InProgress => format!(
            "Guess {}/{}",
            session.attempts().len() + 1,
            session.max_attempts()
        ),
        Status::Won => "Solved!".to_string(),
        Status::Lost => "Out of guesses".to_string(),
    };
    f.render_widget(
        Paragraph::new(status_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = app.stats().map_or_else(
        || "Stats off".to_string(),
        |stats| {
            format!(
                "Games: {} | Win Rate: {:.0}%",
                stats.played,
                stats.win_rate()
            )
        },
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let streak_text = app
        .stats()
        .map_or_else(String::new, |stats| {
            format!("Streak: {} (max {})", stats.current_streak, stats.max_streak)
        });
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Enter: Submit | ^N: New | ^S: Share | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
