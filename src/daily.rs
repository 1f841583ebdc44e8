//! One puzzle per UTC day
//!
//! Ties dates to seeds and makes sure each date is generated at most once, with
//! the stored puzzle reused afterwards.

use crate::core::{PlayResult, Puzzle};
use crate::generator::generate_puzzle;
use crate::store::{DATE_FORMAT, PlayStore, PuzzleStore, StoreError};
use chrono::{NaiveDate, Utc};

/// Prefix of every daily seed; bump it to reshuffle all future puzzles
pub const SEED_VERSION: &str = "v1";

/// Today's date in UTC
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Seed string for a date, e.g. `v1-2025-06-01`
#[must_use]
pub fn seed_for(date: NaiveDate) -> String {
    format!("{SEED_VERSION}-{}", date.format(DATE_FORMAT))
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
/// Returns a message naming the expected format when `s` is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}

/// Get the stored puzzle for `date`, generating and storing it if absent
///
/// # Errors
/// Returns a `StoreError` if the store cannot be read or written.
pub fn load_or_generate<S, W>(
    store: &mut S,
    date: NaiveDate,
    words: &[W],
) -> Result<Puzzle, StoreError>
where
    S: PuzzleStore + ?Sized,
    W: AsRef<str>,
{
    if let Some(puzzle) = store.get_puzzle(date)? {
        log::info!("Using stored puzzle for {date}");
        return Ok(puzzle);
    }

    let seed = seed_for(date);
    log::info!("Generating puzzle for {date} from seed {seed}");
    let puzzle = generate_puzzle(&seed, words);
    store.put_puzzle(date, &puzzle)?;
    Ok(puzzle)
}

/// Store the result of playing `date`, replacing any earlier one
///
/// # Errors
/// Returns a `StoreError` if the store cannot be written.
pub fn record_play<S: PlayStore + ?Sized>(
    store: &mut S,
    date: NaiveDate,
    result: PlayResult,
) -> Result<(), StoreError> {
    log::info!(
        "Recording play for {date}: solved={} time={}ms",
        result.solved,
        result.time_ms
    );
    store.put_play(date, result)
}

/// Summary of stored plays
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HistoryStats {
    pub played: usize,
    pub solved: usize,
    /// Average time of solved plays, in seconds
    pub avg_solved_seconds: Option<f64>,
}

impl HistoryStats {
    #[must_use]
    pub fn from_plays(plays: &[(NaiveDate, PlayResult)]) -> Self {
        let solved: Vec<u64> = plays
            .iter()
            .filter(|(_, r)| r.solved)
            .map(|(_, r)| r.time_ms)
            .collect();
        let avg_solved_seconds = if solved.is_empty() {
            None
        } else {
            Some(solved.iter().sum::<u64>() as f64 / solved.len() as f64 / 1000.0)
        };

        Self {
            played: plays.len(),
            solved: solved.len(),
            avg_solved_seconds,
        }
    }

    /// Fraction of plays solved, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.solved as f64 / self.played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::wordlists::WORDS;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn seed_format() {
        assert_eq!(seed_for(day(1)), "v1-2025-06-01");
    }

    #[test]
    fn parse_date_accepts_iso() {
        assert_eq!(parse_date("2025-06-09"), Ok(day(9)));
        assert!(parse_date("06/09/2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn generates_once_then_reuses() {
        let mut store = MemoryStore::new();
        let first = load_or_generate(&mut store, day(1), WORDS).unwrap();
        assert_eq!(store.puzzle_count(), 1);

        let second = load_or_generate(&mut store, day(1), WORDS).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.puzzle_count(), 1);
    }

    #[test]
    fn stored_puzzle_wins_over_generation() {
        let mut store = MemoryStore::new();
        let custom = Puzzle {
            picks: vec!["LEMON".to_string()],
            answer: "LEMON".to_string(),
            clues: Vec::new(),
        };
        store.put_puzzle(day(2), &custom).unwrap();

        assert_eq!(load_or_generate(&mut store, day(2), WORDS).unwrap(), custom);
    }

    #[test]
    fn generated_puzzle_matches_seed() {
        let mut store = MemoryStore::new();
        let puzzle = load_or_generate(&mut store, day(3), WORDS).unwrap();
        assert_eq!(puzzle, generate_puzzle(&seed_for(day(3)), WORDS));
    }

    #[test]
    fn record_play_overwrites() {
        let mut store = MemoryStore::new();
        let a = PlayResult {
            solved: false,
            time_ms: 100,
            hints: 0,
        };
        let b = PlayResult {
            solved: true,
            time_ms: 200,
            hints: 0,
        };
        record_play(&mut store, day(4), a).unwrap();
        record_play(&mut store, day(4), b).unwrap();
        assert_eq!(store.get_play(day(4)).unwrap(), Some(b));
    }

    #[test]
    fn history_stats() {
        let plays = vec![
            (
                day(1),
                PlayResult {
                    solved: true,
                    time_ms: 10_000,
                    hints: 0,
                },
            ),
            (
                day(2),
                PlayResult {
                    solved: false,
                    time_ms: 5_000,
                    hints: 0,
                },
            ),
            (
                day(3),
                PlayResult {
                    solved: true,
                    time_ms: 20_000,
                    hints: 0,
                },
            ),
        ];
        let stats = HistoryStats::from_plays(&plays);
        assert_eq!(stats.played, 3);
        assert_eq!(stats.solved, 2);
        assert_eq!(stats.avg_solved_seconds, Some(15.0));
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_history() {
        let stats = HistoryStats::from_plays(&[]);
        assert_eq!(stats.played, 0);
        assert_eq!(stats.avg_solved_seconds, None);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }
}
