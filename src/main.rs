//! Word Guess - CLI
//!
//! Wordle-style guessing game with TUI and simple CLI modes, daily puzzles,
//! and a couple of analysis helpers.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_game::{
    commands::{PlayConfig, analyze_guess, check_guess, run_simple},
    game::WordSource,
    output::{print_analysis_result, print_check_result, print_stats},
    stats::StatsStore,
    wordlists::loader::{embedded_source, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Play the daily puzzle instead of a random word
    #[arg(short, long, global = true)]
    daily: bool,

    /// Date for the daily puzzle and share text (YYYY-MM-DD, default today)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Fixed seed for random target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Statistics file (default: platform data directory)
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,

    /// Do not read or write statistics
    #[arg(long, global = true)]
    no_stats: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the feedback a guess gets against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Split the word list by the feedback a guess would produce
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Show saved statistics
    Stats,
}

/// Load the word source based on the -w flag
fn load_source(wordlist: &str) -> Result<WordSource> {
    match wordlist {
        "embedded" => embedded_source().context("embedded word list is unusable"),
        path => load_from_file(path).with_context(|| format!("cannot use word list '{path}'")),
    }
}

/// Open the statistics store unless disabled
///
/// A store that cannot be opened is logged and play continues without it.
fn open_store(cli: &Cli) -> Option<StatsStore> {
    if cli.no_stats {
        return None;
    }
    let path = cli.stats_file.clone().or_else(StatsStore::default_path)?;
    match StatsStore::open(&path) {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("statistics disabled: {e}");
            None
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let source = load_source(&cli.wordlist)?;
    let date = cli
        .date
        .unwrap_or_else(|| Local::now().date_naive())
        .format("%Y-%m-%d")
        .to_string();
    let config = PlayConfig::new(date, cli.daily);
    log::debug!("loaded {} words, date {}", source.len(), config.date);

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli, &source, config),
        Commands::Simple => run_simple_command(&cli, &source, &config),
        Commands::Check { guess, target } => {
            let result = check_guess(guess, target, &source)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_guess(word, &source, true)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Stats => {
            let store = open_store(&cli).context("no statistics file available")?;
            print_stats(store.stats());
            Ok(())
        }
    }
}

fn run_simple_command(cli: &Cli, source: &WordSource, config: &PlayConfig) -> Result<()> {
    let mut store = open_store(cli);
    let mut rng = make_rng(cli.seed);
    run_simple(source, config, store.as_mut(), &mut rng)
}

fn run_play_command(cli: &Cli, source: &WordSource, config: PlayConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(source, config, open_store(cli), make_rng(cli.seed));
    run_tui(app)
}
