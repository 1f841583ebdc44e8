//! Command implementations

pub mod check;
pub mod history;
pub mod show;
pub mod simple;
pub mod trace;

pub use check::{CheckStatistics, DateCheck, check_date, run_check};
pub use history::{HistoryReport, load_history};
pub use show::{PuzzleSource, ShownPuzzle, load_puzzle};
pub use simple::{parse_pick, run_simple};
pub use trace::{TraceResult, trace_puzzle};
