//! Simple interactive CLI mode
//!
//! Plays the daily puzzle on stdin/stdout without the TUI

use crate::core::{PlayResult, Puzzle};
use crate::daily::{load_or_generate, record_play};
use crate::output::display::{print_clues, print_outcome, print_picks};
use crate::store::{PlayStore, PuzzleStore};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Resolve the player's input to one of the picks
///
/// Accepts a 1-based index or the word itself, in any case.
#[must_use]
pub fn parse_pick<'a>(input: &str, puzzle: &'a Puzzle) -> Option<&'a str> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| puzzle.picks.get(i))
            .map(String::as_str);
    }
    let upper = input.to_ascii_uppercase();
    puzzle
        .picks
        .iter()
        .find(|w| **w == upper)
        .map(String::as_str)
}

/// Run the simple interactive CLI mode for `date`
///
/// If the date was already played, the stored outcome is shown and no new pick
/// is taken.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written, or on an I/O error
/// reading user input.
pub fn run_simple<S, W>(store: &mut S, date: NaiveDate, words: &[W]) -> Result<()>
where
    S: PuzzleStore + PlayStore + ?Sized,
    W: AsRef<str>,
{
    let puzzle = load_or_generate(store, date, words)
        .with_context(|| format!("Failed to load puzzle for {date}"))?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     dotWord  {date}                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_clues(&puzzle.clues);

    if let Some(result) = store
        .get_play(date)
        .with_context(|| format!("Failed to read play for {date}"))?
    {
        println!("\n{}", "Already played today.".bright_black());
        print_picks(&puzzle.picks);
        print_outcome(date, &puzzle, &result);
        return Ok(());
    }

    print_picks(&puzzle.picks);
    println!("\nPick the word the clues describe (number or word), or 'quit'.\n");

    let started = Instant::now();
    let pick = loop {
        let input = get_user_input("Your pick")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Come back later, today's puzzle is still open.\n");
                return Ok(());
            }
            _ => {
                if let Some(pick) = parse_pick(&input, &puzzle) {
                    break pick.to_string();
                }
                println!("❌ Not one of the picks: '{input}'\n");
            }
        }
    };

    let result = PlayResult::from_pick(&puzzle, &pick, started.elapsed());
    record_play(store, date, result).context("Failed to save play result")?;

    print_outcome(date, &puzzle, &result);
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if read == 0 {
        anyhow::bail!("stdin closed before a pick was made");
    }

    Ok(input.trim().to_string())
}
