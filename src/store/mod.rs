//! Date-keyed persistence for puzzles and play results
//!
//! The generator never touches storage. Callers read before writing so that a
//! date gets at most one generated puzzle.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::core::{PlayResult, Puzzle};
use chrono::NaiveDate;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Key format for dates in persisted maps
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a date as its storage key, `YYYY-MM-DD`
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Storage of one puzzle per date
pub trait PuzzleStore {
    /// Get the stored puzzle for a date, if any
    ///
    /// # Errors
    /// Returns a `StoreError` if the backing storage cannot be read.
    fn get_puzzle(&self, date: NaiveDate) -> Result<Option<Puzzle>, StoreError>;

    /// Store the puzzle for a date, replacing any previous one
    ///
    /// # Errors
    /// Returns a `StoreError` if the backing storage cannot be written.
    fn put_puzzle(&mut self, date: NaiveDate, puzzle: &Puzzle) -> Result<(), StoreError>;
}

/// Storage of one play result per date
pub trait PlayStore {
    /// Get the stored play result for a date, if any
    ///
    /// # Errors
    /// Returns a `StoreError` if the backing storage cannot be read.
    fn get_play(&self, date: NaiveDate) -> Result<Option<PlayResult>, StoreError>;

    /// Store the play result for a date, replacing any previous one
    ///
    /// # Errors
    /// Returns a `StoreError` if the backing storage cannot be written.
    fn put_play(&mut self, date: NaiveDate, result: PlayResult) -> Result<(), StoreError>;

    /// All stored play results, oldest date first
    ///
    /// # Errors
    /// Returns a `StoreError` if the backing storage cannot be read.
    fn plays(&self) -> Result<Vec<(NaiveDate, PlayResult)>, StoreError>;
}

/// Error type for persistence failures
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing a store file failed
    Io { path: PathBuf, source: io::Error },
    /// A store file exists but does not hold the expected JSON
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A key in a store file is not a `YYYY-MM-DD` date
    BadKey { path: PathBuf, key: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
            Self::Corrupt { path, source } => {
                write!(f, "Store file {} is corrupt: {source}", path.display())
            }
            Self::BadKey { path, key } => {
                write!(f, "Store file {} has invalid date key '{key}'", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            Self::BadKey { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(date_key(date), "2025-03-07");
    }

    #[test]
    fn error_display_names_file() {
        let err = StoreError::BadKey {
            path: PathBuf::from("/tmp/plays.json"),
            key: "yesterday".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("/tmp/plays.json"));
        assert!(text.contains("yesterday"));
    }
}
