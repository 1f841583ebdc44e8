//! In-memory store

use super::{PlayStore, PuzzleStore, StoreError};
use crate::core::{PlayResult, Puzzle};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Store that keeps everything in maps for the life of the value
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    puzzles: BTreeMap<NaiveDate, Puzzle>,
    plays: BTreeMap<NaiveDate, PlayResult>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored puzzles
    #[must_use]
    pub fn puzzle_count(&self) -> usize {
        self.puzzles.len()
    }
}

impl PuzzleStore for MemoryStore {
    fn get_puzzle(&self, date: NaiveDate) -> Result<Option<Puzzle>, StoreError> {
        Ok(self.puzzles.get(&date).cloned())
    }

    fn put_puzzle(&mut self, date: NaiveDate, puzzle: &Puzzle) -> Result<(), StoreError> {
        self.puzzles.insert(date, puzzle.clone());
        Ok(())
    }
}

impl PlayStore for MemoryStore {
    fn get_play(&self, date: NaiveDate) -> Result<Option<PlayResult>, StoreError> {
        Ok(self.plays.get(&date).copied())
    }

    fn put_play(&mut self, date: NaiveDate, result: PlayResult) -> Result<(), StoreError> {
        self.plays.insert(date, result);
        Ok(())
    }

    fn plays(&self) -> Result<Vec<(NaiveDate, PlayResult)>, StoreError> {
        Ok(self.plays.iter().map(|(&d, &r)| (d, r)).collect())
    }
}
