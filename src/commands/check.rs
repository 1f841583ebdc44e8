//! Sweep many dates and verify generated puzzles
//!
//! Generates the daily puzzle for a run of consecutive dates in parallel and
//! checks each one for uniqueness, monotonic narrowing and distinct clue kinds.

use crate::core::{ClueKind, Puzzle};
use crate::daily::seed_for;
use crate::generator::{GeneratorConfig, Origin, generate_puzzle_with};
use crate::solver::{narrowing_trace, solve};
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Verification of one date's puzzle
#[derive(Debug, Clone)]
pub struct DateCheck {
    pub date: NaiveDate,
    pub puzzle: Puzzle,
    pub origin: Origin,
    /// The clues leave exactly the answer
    pub unique: bool,
    /// Every clue prefix keeps the answer and shrinks the set until it is solved
    pub monotonic: bool,
    /// No two clues share a kind
    pub distinct_kinds: bool,
}

impl DateCheck {
    /// Whether a searched puzzle broke any property; fallbacks are exempt
    #[must_use]
    pub const fn is_violation(&self) -> bool {
        matches!(self.origin, Origin::Search { .. })
            && !(self.unique && self.monotonic && self.distinct_kinds)
    }
}

/// Aggregate statistics of a sweep
#[derive(Debug)]
pub struct CheckStatistics {
    pub from: NaiveDate,
    pub days: usize,
    pub fallbacks: usize,
    pub violations: Vec<DateCheck>,
    /// Outer attempts used by searched puzzles, indexed by attempt number
    pub attempts: BTreeMap<usize, usize>,
    pub kind_usage: BTreeMap<ClueKind, usize>,
    pub answer_lengths: BTreeMap<usize, usize>,
    pub total_time: Duration,
}

impl CheckStatistics {
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        let searched: usize = self.attempts.values().sum();
        if searched == 0 {
            return 0.0;
        }
        let total: usize = self.attempts.iter().map(|(a, n)| (a + 1) * n).sum();
        total as f64 / searched as f64
    }
}

/// Check one date's puzzle
#[must_use]
pub fn check_date<W: AsRef<str>>(
    config: &GeneratorConfig,
    date: NaiveDate,
    words: &[W],
) -> DateCheck {
    let generated = generate_puzzle_with(config, &seed_for(date), words);
    let puzzle = generated.puzzle;

    let remaining = solve(&puzzle.picks, &puzzle.clues);
    let unique = remaining.len() == 1 && remaining[0] == puzzle.answer;

    let monotonic = narrowing_trace(&puzzle.picks, &puzzle.clues)
        .iter()
        .all(|step| {
            step.after.contains(&puzzle.answer)
                && step.after.len() <= step.before.len()
                && (step.before.len() == 1 || step.narrowed())
        });

    let kinds: FxHashSet<ClueKind> = puzzle.clues.iter().map(|c| c.kind()).collect();
    let distinct_kinds = kinds.len() == puzzle.clues.len();

    DateCheck {
        date,
        puzzle,
        origin: generated.origin,
        unique,
        monotonic,
        distinct_kinds,
    }
}

/// Generate and check `days` consecutive dates starting at `from`
///
/// Dates are processed in parallel; results are reported in date order.
#[must_use]
pub fn run_check<W: AsRef<str> + Sync>(
    words: &[W],
    from: NaiveDate,
    days: usize,
    show_progress: bool,
) -> CheckStatistics {
    let config = GeneratorConfig::default();
    let dates: Vec<NaiveDate> = (0..days as u64)
        .filter_map(|offset| from.checked_add_days(Days::new(offset)))
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(dates.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let checks: Vec<DateCheck> = dates
        .par_iter()
        .map(|&date| {
            let check = check_date(&config, date, words);
            pb.inc(1);
            check
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(from, checks, start.elapsed())
}

fn summarize(from: NaiveDate, checks: Vec<DateCheck>, total_time: Duration) -> CheckStatistics {
    let mut stats = CheckStatistics {
        from,
        days: checks.len(),
        fallbacks: 0,
        violations: Vec::new(),
        attempts: BTreeMap::new(),
        kind_usage: BTreeMap::new(),
        answer_lengths: BTreeMap::new(),
        total_time,
    };

    for check in checks {
        match check.origin {
            Origin::Fallback => stats.fallbacks += 1,
            Origin::Search { attempt } => {
                *stats.attempts.entry(attempt).or_insert(0) += 1;
                for clue in &check.puzzle.clues {
                    *stats.kind_usage.entry(clue.kind()).or_insert(0) += 1;
                }
                *stats
                    .answer_lengths
                    .entry(check.puzzle.answer.chars().count())
                    .or_insert(0) += 1;
            }
        }
        if check.is_violation() {
            log::warn!("Puzzle for {} failed verification", check.date);
            stats.violations.push(check);
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn sweep_has_no_violations() {
        let stats = run_check(WORDS, start(), 30, false);
        assert_eq!(stats.days, 30);
        assert_eq!(stats.fallbacks, 0);
        assert!(stats.violations.is_empty());
        assert_eq!(stats.kind_usage.values().sum::<usize>(), 30 * 5);
        assert!(stats.average_attempts() >= 1.0);
    }

    #[test]
    fn sweep_crosses_month_boundary() {
        let from = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
        let stats = run_check(WORDS, from, 5, false);
        assert_eq!(stats.days, 5);
    }

    #[test]
    fn fallbacks_are_not_violations() {
        let words = ["cat", "dog", "emu", "owl", "yak"];
        let stats = run_check(&words, start(), 3, false);
        assert_eq!(stats.fallbacks, 3);
        assert!(stats.violations.is_empty());
        assert!(stats.kind_usage.is_empty());
        assert!(stats.average_attempts().abs() < f64::EPSILON);
    }

    #[test]
    fn check_date_matches_daily_seed() {
        let check = check_date(&GeneratorConfig::default(), start(), WORDS);
        assert!(check.unique && check.monotonic && check.distinct_kinds);
        assert!(!check.is_violation());
    }

    #[test]
    fn zero_days_is_empty() {
        let stats = run_check(WORDS, start(), 0, false);
        assert_eq!(stats.days, 0);
        assert!(stats.attempts.is_empty());
    }
}
