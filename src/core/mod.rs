//! Core domain types for dotWord
//!
//! This module contains the clue model, letter analysis and the persisted
//! puzzle/play records. Everything here is pure data with no I/O.

mod clue;
pub mod letters;
mod puzzle;

pub use clue::{Clue, ClueKind};
pub use puzzle::{PlayResult, Puzzle};
