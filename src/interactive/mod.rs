//! Interactive TUI for playing the daily puzzle

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, TICK, run_tui};
