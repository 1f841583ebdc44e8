//! Filtering a word set by a clue list

use super::predicate::satisfies;
use crate::core::Clue;

/// Keep every word that satisfies all clues
///
/// Input order is preserved. With no clues the input comes back unchanged.
///
/// # Examples
/// ```
/// use dotword::core::Clue;
/// use dotword::solver::solve;
///
/// let words = ["APPLE", "GRAPE", "LEMON"].map(String::from);
/// let left = solve(&words, &[Clue::EndsWith { letter: 'E' }]);
/// assert_eq!(left, vec!["APPLE".to_string(), "GRAPE".to_string()]);
/// ```
#[must_use]
pub fn solve<W: AsRef<str>>(words: &[W], clues: &[Clue]) -> Vec<String> {
    words
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|word| clues.iter().all(|clue| satisfies(word, clue)))
        .map(str::to_string)
        .collect()
}

/// Candidates remaining around one clue of a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrowingStep {
    pub clue: Clue,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

impl NarrowingStep {
    /// Whether this clue removed at least one candidate
    #[must_use]
    pub fn narrowed(&self) -> bool {
        self.after.len() < self.before.len()
    }
}

/// Apply clues one prefix at a time, recording the candidates before and after each
#[must_use]
pub fn narrowing_trace<W: AsRef<str>>(words: &[W], clues: &[Clue]) -> Vec<NarrowingStep> {
    let mut current = solve(words, &[]);
    let mut steps = Vec::with_capacity(clues.len());

    for (i, clue) in clues.iter().enumerate() {
        let after = solve(words, &clues[..=i]);
        steps.push(NarrowingStep {
            clue: clue.clone(),
            before: std::mem::replace(&mut current, after.clone()),
            after,
        });
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks() -> Vec<String> {
        ["APPLE", "GRAPE", "LEMON", "MELON", "PEACH"]
            .map(String::from)
            .to_vec()
    }

    #[test]
    fn empty_clues_returns_input() {
        assert_eq!(solve(&picks(), &[]), picks());
    }

    #[test]
    fn empty_words_returns_empty() {
        let words: Vec<String> = Vec::new();
        assert!(solve(&words, &[Clue::NoRepeatLetters]).is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let result = solve(&picks(), &[Clue::Contains { letter: 'E' }]);
        assert_eq!(result, picks());

        let result = solve(&picks(), &[Clue::Contains { letter: 'L' }]);
        assert_eq!(result, vec!["APPLE", "LEMON", "MELON"]);
    }

    #[test]
    fn all_clues_must_hold() {
        let clues = [
            Clue::Contains { letter: 'L' },
            Clue::NoRepeatLetters,
            Clue::StartsWith { letter: 'M' },
        ];
        assert_eq!(solve(&picks(), &clues), vec!["MELON"]);
    }

    #[test]
    fn clue_order_does_not_matter() {
        let mut clues = vec![
            Clue::VowelCount { count: 2 },
            Clue::AlphaAfter {
                word: "GRAPE".to_string(),
            },
            Clue::NotWord {
                word: "MELON".to_string(),
            },
        ];
        let forward = solve(&picks(), &clues);
        clues.reverse();
        assert_eq!(solve(&picks(), &clues), forward);
        assert_eq!(forward, vec!["LEMON", "PEACH"]);
    }

    #[test]
    fn accepts_str_slices() {
        let words = ["BANANA", "CHERRY"];
        assert_eq!(solve(&words, &[Clue::HasDoubleLetter]), vec!["CHERRY"]);
    }

    #[test]
    fn trace_records_each_prefix() {
        let clues = [
            Clue::Contains { letter: 'L' },
            Clue::StartsWith { letter: 'M' },
        ];
        let trace = narrowing_trace(&picks(), &clues);

        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].before.len(), 5);
        assert_eq!(trace[0].after, vec!["APPLE", "LEMON", "MELON"]);
        assert_eq!(trace[1].before, trace[0].after);
        assert_eq!(trace[1].after, vec!["MELON"]);
        assert!(trace.iter().all(NarrowingStep::narrowed));
    }

    #[test]
    fn trace_flags_non_narrowing_clue() {
        let trace = narrowing_trace(&picks(), &[Clue::Contains { letter: 'E' }]);
        assert!(!trace[0].narrowed());
    }
}
