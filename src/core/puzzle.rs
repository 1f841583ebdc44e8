//! Puzzle and play result records
//!
//! These are the values persisted per calendar date.

use super::Clue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One day's puzzle
///
/// Applying every clue to `picks` leaves exactly `answer`. This is guaranteed at
/// generation time and not re-checked on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub picks: Vec<String>,
    pub answer: String,
    pub clues: Vec<Clue>,
}

impl Puzzle {
    /// Whether `word` is this puzzle's answer
    #[must_use]
    pub fn is_answer(&self, word: &str) -> bool {
        self.answer == word
    }
}

/// Outcome of the player's pick for one date
///
/// `solved` is stored as `0` or `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResult {
    #[serde(with = "solved_flag")]
    pub solved: bool,
    #[serde(rename = "timeMs")]
    pub time_ms: u64,
    pub hints: u32,
}

impl PlayResult {
    /// Build the result of picking `pick` after `elapsed` on the clock
    #[must_use]
    pub fn from_pick(puzzle: &Puzzle, pick: &str, elapsed: Duration) -> Self {
        Self {
            solved: puzzle.is_answer(pick),
            time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            hints: 0,
        }
    }

    /// Whole seconds taken
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.time_ms / 1000
    }
}

mod solved_flag {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // serde `with` passes the field by reference
    pub fn serialize<S: Serializer>(solved: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*solved))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(D::Error::invalid_value(
                Unexpected::Unsigned(u64::from(other)),
                &"0 or 1",
            )),
        }
    }
}
