//! Clue-by-clue narrowing of a puzzle

use crate::core::Puzzle;
use crate::solver::{NarrowingStep, narrowing_trace, solve};

/// How a puzzle's clues cut the picks down to the answer
#[derive(Debug, Clone)]
pub struct TraceResult {
    pub label: String,
    pub puzzle: Puzzle,
    pub steps: Vec<NarrowingStep>,
    /// Picks left after every clue
    pub remaining: Vec<String>,
}

impl TraceResult {
    /// Whether the clues leave the answer and nothing else
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.remaining.len() == 1 && self.remaining[0] == self.puzzle.answer
    }

    /// Number of clues that removed at least one pick
    #[must_use]
    pub fn narrowing_clues(&self) -> usize {
        self.steps.iter().filter(|s| s.narrowed()).count()
    }
}

/// Trace the clues of `puzzle` over its picks
#[must_use]
pub fn trace_puzzle(label: String, puzzle: Puzzle) -> TraceResult {
    let steps = narrowing_trace(&puzzle.picks, &puzzle.clues);
    let remaining = solve(&puzzle.picks, &puzzle.clues);

    TraceResult {
        label,
        puzzle,
        steps,
        remaining,
    }
}
