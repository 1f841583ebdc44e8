//! Clue evaluation and candidate filtering
//!
//! `satisfies` checks one word against one clue; `solve` filters a word set
//! by a clue list.

mod engine;
mod predicate;

pub use engine::{NarrowingStep, narrowing_trace, solve};
pub use predicate::satisfies;
