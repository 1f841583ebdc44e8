//! Look up or generate a single puzzle

use crate::core::Puzzle;
use crate::daily::{load_or_generate, seed_for};
use crate::generator::{GeneratorConfig, fallback_puzzle, generate_puzzle};
use crate::store::{PuzzleStore, StoreError};
use chrono::NaiveDate;

/// Which puzzle a command works on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleSource {
    /// The daily puzzle for a date, read from or saved to the store
    Date(NaiveDate),
    /// A puzzle generated from an arbitrary seed, never stored
    Seed(String),
}

impl PuzzleSource {
    /// Human label, the date or the quoted seed
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Date(date) => date.to_string(),
            Self::Seed(seed) => format!("seed \"{seed}\""),
        }
    }

    #[must_use]
    pub fn seed(&self) -> String {
        match self {
            Self::Date(date) => seed_for(*date),
            Self::Seed(seed) => seed.clone(),
        }
    }
}

/// A puzzle ready for display
#[derive(Debug, Clone)]
pub struct ShownPuzzle {
    pub label: String,
    pub puzzle: Puzzle,
    /// Whether this is the fixed puzzle used when generation gives up
    pub fallback: bool,
}

/// Resolve a source to its puzzle
///
/// Dates go through the store so a date is generated at most once. Seeds are
/// generated fresh and left out of the store.
///
/// # Errors
/// Returns a `StoreError` if the store cannot be read or written.
pub fn load_puzzle<S, W>(
    store: &mut S,
    source: &PuzzleSource,
    words: &[W],
) -> Result<ShownPuzzle, StoreError>
where
    S: PuzzleStore + ?Sized,
    W: AsRef<str>,
{
    let puzzle = match source {
        PuzzleSource::Date(date) => load_or_generate(store, *date, words)?,
        PuzzleSource::Seed(seed) => generate_puzzle(seed, words),
    };
    let fallback = puzzle == fallback_puzzle(words, GeneratorConfig::default().pick_count);

    Ok(ShownPuzzle {
        label: source.label(),
        puzzle,
        fallback,
    })
}
