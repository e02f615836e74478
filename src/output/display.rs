//! Display functions for game state and command results

use super::formatters::{create_progress_bar, feedback_row, keyboard_lines, tile};
use crate::commands::{AnalysisResult, CheckResult};
use crate::core::{KeyStates, WORD_LEN};
use crate::game::Session;
use crate::stats::Statistics;
use colored::Colorize;

/// Print submitted rows, the row being typed, and empty rows
pub fn print_board(session: &Session<'_>) {
    println!();
    for (guess, feedback) in session.evaluations() {
        println!("   {}", feedback_row(guess, &feedback));
    }

    if !session.status().is_terminal() {
        let typed: String = session
            .current_input()
            .chars()
            .chain(std::iter::repeat('·'))
            .take(WORD_LEN)
            .map(|letter| tile(letter, None).to_string())
            .collect();
        println!("   {typed}");
    }

    let shown = session.attempts().len() + usize::from(!session.status().is_terminal());
    for _ in shown..session.max_attempts() {
        println!("   {}", " · ".repeat(WORD_LEN).bright_black());
    }
    println!();
}

/// Print the on-screen keyboard colored by letter state
pub fn print_keyboard(keys: &KeyStates) {
    for line in keyboard_lines(keys) {
        println!("   {line}");
    }
    println!();
}

/// Print the result of checking one guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} → {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("   {}", feedback_row(&result.guess, &result.feedback));
    println!("   {}", result.feedback.to_emoji());
    if !result.guess_in_list {
        println!(
            "{}",
            "   (guess is not in the word list and would be rejected in a game)".bright_black()
        );
    }
}

/// Print the result of analyzing a guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible targets:", result.total_targets);
    println!(
        "   Distinct feedback: {}",
        result.distinct_feedback.to_string().bright_yellow()
    );
    println!(
        "   Expected left:     {:.1} targets",
        result.expected_remaining
    );

    println!("\n📈 {}", "Largest groups:".bright_cyan().bold());
    for (feedback, count) in &result.largest_buckets {
        let bar = create_progress_bar(*count as f64, result.total_targets as f64, 30);
        println!("   {feedback} {} {count:5}", bar.green());
    }
}

/// Print lifetime statistics
pub fn print_stats(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:          {}", stats.played);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 40);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
    println!();
}
