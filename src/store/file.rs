//! JSON file store
//!
//! Keeps `puzzles.json` and `plays.json` in one directory. Both files hold a
//! map from `YYYY-MM-DD` to the stored value. Everything is loaded on open and
//! the touched file is rewritten on each put. A put whose write fails leaves the
//! store unchanged.

use super::{DATE_FORMAT, PlayStore, PuzzleStore, StoreError, date_key};
use crate::core::{PlayResult, Puzzle};
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const PUZZLES_FILE: &str = "puzzles.json";
const PLAYS_FILE: &str = "plays.json";
const APP_DIR: &str = "dotword";

/// Store backed by two JSON files in a data directory
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    puzzles: BTreeMap<NaiveDate, Puzzle>,
    plays: BTreeMap<NaiveDate, PlayResult>,
}

impl FileStore {
    /// Open the store in `dir`, creating the directory if needed
    ///
    /// Missing files are treated as empty.
    ///
    /// # Errors
    /// Returns a `StoreError` if the directory cannot be created or an existing
    /// file cannot be read or parsed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let puzzles = load_map(&dir.join(PUZZLES_FILE))?;
        let plays = load_map(&dir.join(PLAYS_FILE))?;
        log::debug!(
            "Opened store at {} ({} puzzles, {} plays)",
            dir.display(),
            puzzles.len(),
            plays.len()
        );

        Ok(Self {
            dir,
            puzzles,
            plays,
        })
    }

    /// Platform data directory for the app, e.g. `~/.local/share/dotword`
    ///
    /// Falls back to `.dotword` in the working directory when the platform has
    /// no data directory.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::data_dir().map_or_else(|| PathBuf::from(".dotword"), |d| d.join(APP_DIR))
    }

    /// Open the store in [`FileStore::default_dir`]
    ///
    /// # Errors
    /// See [`FileStore::open`].
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(Self::default_dir())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PuzzleStore for FileStore {
    fn get_puzzle(&self, date: NaiveDate) -> Result<Option<Puzzle>, StoreError> {
        Ok(self.puzzles.get(&date).cloned())
    }

    fn put_puzzle(&mut self, date: NaiveDate, puzzle: &Puzzle) -> Result<(), StoreError> {
        let mut puzzles = self.puzzles.clone();
        puzzles.insert(date, puzzle.clone());
        save_map(&self.dir.join(PUZZLES_FILE), &puzzles)?;
        self.puzzles = puzzles;
        Ok(())
    }
}

impl PlayStore for FileStore {
    fn get_play(&self, date: NaiveDate) -> Result<Option<PlayResult>, StoreError> {
        Ok(self.plays.get(&date).copied())
    }

    fn put_play(&mut self, date: NaiveDate, result: PlayResult) -> Result<(), StoreError> {
        let mut plays = self.plays.clone();
        plays.insert(date, result);
        save_map(&self.dir.join(PLAYS_FILE), &plays)?;
        self.plays = plays;
        Ok(())
    }

    fn plays(&self) -> Result<Vec<(NaiveDate, PlayResult)>, StoreError> {
        Ok(self.plays.iter().map(|(&d, &r)| (d, r)).collect())
    }
}

fn load_map<T: DeserializeOwned>(path: &Path) -> Result<BTreeMap<NaiveDate, T>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let raw: BTreeMap<String, T> =
        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;

    raw.into_iter()
        .map(|(key, value)| {
            NaiveDate::parse_from_str(&key, DATE_FORMAT)
                .map(|date| (date, value))
                .map_err(|_| StoreError::BadKey {
                    path: path.to_path_buf(),
                    key,
                })
        })
        .collect()
}

fn save_map<T: Serialize>(path: &Path, map: &BTreeMap<NaiveDate, T>) -> Result<(), StoreError> {
    let raw: BTreeMap<String, &T> = map.iter().map(|(&d, v)| (date_key(d), v)).collect();
    let json = serde_json::to_string_pretty(&raw).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote {} entries to {}", map.len(), path.display());
    Ok(())
}
