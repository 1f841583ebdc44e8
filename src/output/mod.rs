//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_check_statistics, print_history, print_puzzle, print_trace};
pub use formatters::{share_text, time_bars};
