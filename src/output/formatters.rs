//! Formatting utilities for terminal output

use crate::core::PlayResult;
use crate::store::date_key;
use chrono::NaiveDate;

const GREEN: char = '🟩';
const WHITE: char = '⬜';
const RED: char = '🟥';
const BAR_SLOTS: usize = 5;

/// Green squares earned for solving in `seconds`
#[must_use]
pub const fn green_squares(seconds: u64) -> usize {
    match seconds {
        0..10 => 5,
        10..20 => 4,
        20..30 => 3,
        30..45 => 2,
        _ => 1,
    }
}

/// Five squares rating a result: red when unsolved, otherwise green for speed
#[must_use]
pub fn time_bars(solved: bool, seconds: u64) -> String {
    if !solved {
        return RED.to_string().repeat(BAR_SLOTS);
    }
    let green = green_squares(seconds);
    let mut bars = String::with_capacity(BAR_SLOTS * 4);
    bars.extend(std::iter::repeat_n(GREEN, green));
    bars.extend(std::iter::repeat_n(WHITE, BAR_SLOTS - green));
    bars
}

/// Shareable summary, e.g. `dotWord 2025-06-01 ✅ 12s` over a row of squares
#[must_use]
pub fn share_text(date: NaiveDate, result: &PlayResult) -> String {
    let mark = if result.solved { '✅' } else { '❌' };
    let seconds = result.seconds();
    format!(
        "dotWord {} {mark} {seconds}s\n{}",
        date_key(date),
        time_bars(result.solved, seconds)
    )
}

/// Format elapsed milliseconds as `m:ss`
#[must_use]
pub fn clock(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
