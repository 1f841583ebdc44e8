//! Past play results

use crate::core::PlayResult;
use crate::daily::HistoryStats;
use crate::store::{PlayStore, StoreError};
use chrono::NaiveDate;

/// Every stored play with its summary
#[derive(Debug, Clone)]
pub struct HistoryReport {
    pub entries: Vec<(NaiveDate, PlayResult)>,
    pub stats: HistoryStats,
    /// Consecutive solved days ending at the most recent play
    pub current_streak: usize,
}

/// Read the play history from the store
///
/// # Errors
/// Returns a `StoreError` if the store cannot be read.
pub fn load_history<S: PlayStore + ?Sized>(store: &S) -> Result<HistoryReport, StoreError> {
    let entries = store.plays()?;
    let stats = HistoryStats::from_plays(&entries);
    let current_streak = current_streak(&entries);
    Ok(HistoryReport {
        entries,
        stats,
        current_streak,
    })
}

/// Solved days in a row, counting back from the last entry
///
/// A missing day or an unsolved play ends the streak.
fn current_streak(entries: &[(NaiveDate, PlayResult)]) -> usize {
    let mut streak = 0;
    let mut expected: Option<NaiveDate> = None;

    for (date, result) in entries.iter().rev() {
        if !result.solved || expected.is_some_and(|e| e != *date) {
            break;
        }
        streak += 1;
        expected = date.pred_opt();
    }

    streak
}
