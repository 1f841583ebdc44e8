//! dotWord
//!
//! A daily word deduction puzzle: five picks, five clues, one answer. Puzzles
//! are generated deterministically from a seed, so every player gets the same
//! puzzle for a given date.
//!
//! # Quick Start
//!
//! ```rust
//! use dotword::generator::generate_puzzle;
//! use dotword::solver::solve;
//! use dotword::wordlists::WORDS;
//!
//! let puzzle = generate_puzzle("v1-2025-06-01", WORDS);
//! assert_eq!(solve(&puzzle.picks, &puzzle.clues), vec![puzzle.answer.clone()]);
//! ```

// Core domain types
pub mod core;

// Clue evaluation and filtering
pub mod solver;

// Seeded puzzle generation
pub mod generator;

// Word lists
pub mod wordlists;

// Persistence
pub mod store;

// Date to puzzle mapping
pub mod daily;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log setup for the binary
pub mod logging;
