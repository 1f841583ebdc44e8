//! dotWord - CLI
//!
//! Daily word deduction puzzle with TUI and line modes, plus tools to inspect
//! and verify generated puzzles.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use dotword::{
    commands::{
        PuzzleSource, ShownPuzzle, load_history, load_puzzle, run_check, run_simple, trace_puzzle,
    },
    daily::{load_or_generate, parse_date, today_utc},
    interactive::{App, run_tui},
    logging,
    output::{print_check_statistics, print_history, print_puzzle, print_trace},
    store::{FileStore, MemoryStore, PlayStore},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "dotword",
    about = "Daily word puzzle: five picks, five clues, one answer",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Directory for puzzles.json and plays.json (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log progress at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzle in the TUI (default)
    Play,

    /// Play today's puzzle in line mode (no TUI)
    Simple,

    /// Print a puzzle's clues and picks
    Show {
        #[command(flatten)]
        target: Target,

        /// Also print the answer
        #[arg(short, long)]
        reveal: bool,
    },

    /// Show how each clue narrows the picks
    Trace {
        #[command(flatten)]
        target: Target,
    },

    /// Generate puzzles for a run of dates and verify them
    Check {
        /// Number of consecutive dates
        #[arg(short = 'n', long, default_value = "365")]
        days: usize,

        /// First date, YYYY-MM-DD (default: today)
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
    },

    /// List stored play results
    History,
}

#[derive(Args)]
struct Target {
    /// Puzzle date, YYYY-MM-DD (default: today)
    #[arg(long, value_parser = parse_date, conflicts_with = "seed")]
    date: Option<NaiveDate>,

    /// Generate from an arbitrary seed instead of a date (not stored)
    #[arg(long)]
    seed: Option<String>,
}

impl Target {
    fn source(self) -> PuzzleSource {
        match (self.seed, self.date) {
            (Some(seed), _) => PuzzleSource::Seed(seed),
            (None, date) => PuzzleSource::Date(date.unwrap_or_else(today_utc)),
        }
    }
}

/// Load the word list given by `--wordlist`, or the built-in one
fn load_words(path: Option<&Path>) -> Result<Vec<String>> {
    let words = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };
    if words.is_empty() {
        log::warn!("Word list is empty; every puzzle will be the fallback");
    }
    log::info!("Loaded {} words", words.len());
    Ok(words)
}

fn open_store(data_dir: Option<&Path>) -> Result<FileStore> {
    let dir = data_dir.map_or_else(FileStore::default_dir, Path::to_path_buf);
    FileStore::open(&dir).with_context(|| format!("Failed to open store in {}", dir.display()))
}

/// Load the puzzle for a source; seeds never touch the data directory
fn resolve_puzzle(
    source: &PuzzleSource,
    data_dir: Option<&Path>,
    words: &[String],
) -> Result<ShownPuzzle> {
    let shown = match source {
        PuzzleSource::Date(_) => load_puzzle(&mut open_store(data_dir)?, source, words),
        PuzzleSource::Seed(_) => load_puzzle(&mut MemoryStore::new(), source, words),
    };
    shown.with_context(|| format!("Failed to load puzzle for {}", source.label()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let words = load_words(cli.wordlist.as_deref())?;
    let data_dir = cli.data_dir.as_deref();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(data_dir, &words),
        Commands::Simple => {
            let mut store = open_store(data_dir)?;
            run_simple(&mut store, today_utc(), &words)
        }
        Commands::Show { target, reveal } => {
            let shown = resolve_puzzle(&target.source(), data_dir, &words)?;
            print_puzzle(&shown, reveal);
            Ok(())
        }
        Commands::Trace { target } => {
            let shown = resolve_puzzle(&target.source(), data_dir, &words)?;
            print_trace(&trace_puzzle(shown.label, shown.puzzle));
            Ok(())
        }
        Commands::Check { days, from } => {
            let from = from.unwrap_or_else(today_utc);
            println!("🎯 Checking {days} dates from {from}...");
            let stats = run_check(&words, from, days, true);
            print_check_statistics(&stats);
            Ok(())
        }
        Commands::History => {
            let store = open_store(data_dir)?;
            let report = load_history(&store).context("Failed to read play history")?;
            print_history(&report);
            Ok(())
        }
    }
}

fn run_play_command(data_dir: Option<&Path>, words: &[String]) -> Result<()> {
    let mut store = open_store(data_dir)?;
    let date = today_utc();

    let puzzle = load_or_generate(&mut store, date, words)
        .with_context(|| format!("Failed to load puzzle for {date}"))?;
    let existing = store
        .get_play(date)
        .with_context(|| format!("Failed to read play for {date}"))?;

    let app = App::new(date, puzzle, existing);
    run_tui(app, &mut store)
}
