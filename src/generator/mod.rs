//! Seeded puzzle generation
//!
//! Given a seed and a word list, picks five words, chooses an answer and builds
//! five clues that leave only the answer.

pub mod candidates;
mod puzzle;
pub mod rng;

pub use candidates::build_candidate_clues;
pub use puzzle::{
    FALLBACK_ANSWER, Generated, GeneratorConfig, NarrowingRule, Origin, fallback_puzzle,
    generate_puzzle, generate_puzzle_with,
};
