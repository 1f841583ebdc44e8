//! Puzzle generation
//!
//! Repeatedly draws five picks and an answer, then greedily accepts clues from
//! the answer's candidate pool until five of them single out the answer. Gives
//! up after a bounded number of attempts and returns a fixed fallback puzzle,
//! so generation never fails.

use super::candidates::build_candidate_clues;
use super::rng;
use crate::core::{Clue, ClueKind, Puzzle, letters};
use crate::solver::solve;
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

/// Answer used by the fallback when the word list gives nothing to work with
pub const FALLBACK_ANSWER: &str = "ERROR";

/// When a clue counts as narrowing the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NarrowingRule {
    /// Every accepted clue must remove at least one candidate.
    ///
    /// With as many clues as picks this can never complete (the last clue would
    /// have to remove the answer), so generation always ends in the fallback.
    Strict,
    /// Clues must remove a candidate while more than one remains; once only the
    /// answer is left, any clue that keeps it is accepted.
    #[default]
    UntilSolved,
}

impl NarrowingRule {
    const fn accepts(self, before: usize, after: usize) -> bool {
        match self {
            Self::Strict => after < before,
            Self::UntilSolved => after < before || before == 1,
        }
    }
}

/// Generation limits and shape
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Word sets drawn before falling back
    pub outer_tries: usize,
    /// Clue draws per word set
    pub inner_tries: usize,
    /// Words shown to the player
    pub pick_count: usize,
    /// Clues in a finished puzzle
    pub clue_count: usize,
    /// Shortest word eligible as a pick
    pub min_word_len: usize,
    pub narrowing: NarrowingRule,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            outer_tries: 200,
            inner_tries: 500,
            pick_count: 5,
            clue_count: 5,
            min_word_len: 4,
            narrowing: NarrowingRule::default(),
        }
    }
}

/// Where a generated puzzle came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Found on the given 0-based outer attempt
    Search { attempt: usize },
    /// No attempt succeeded
    Fallback,
}

/// A puzzle together with how it was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub puzzle: Puzzle,
    pub origin: Origin,
}

impl Generated {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.origin, Origin::Fallback)
    }
}

/// Generate the puzzle for `seed` with the default configuration
///
/// Deterministic: the same seed and word list always give the same puzzle.
///
/// # Examples
/// ```
/// use dotword::generator::generate_puzzle;
/// use dotword::wordlists::WORDS;
///
/// let a = generate_puzzle("v1-2025-06-01", WORDS);
/// let b = generate_puzzle("v1-2025-06-01", WORDS);
/// assert_eq!(a, b);
/// assert_eq!(a.clues.len(), 5);
/// ```
#[must_use]
pub fn generate_puzzle<W: AsRef<str>>(seed: &str, words: &[W]) -> Puzzle {
    generate_puzzle_with(&GeneratorConfig::default(), seed, words).puzzle
}

/// Generate the puzzle for `seed`, reporting whether the fallback was used
#[must_use]
pub fn generate_puzzle_with<W: AsRef<str>>(
    config: &GeneratorConfig,
    seed: &str,
    words: &[W],
) -> Generated {
    let mut rng = rng::seeded(seed);

    for attempt in 0..config.outer_tries {
        let picks = pick_distinct(&mut rng, words, config);
        if picks.is_empty() || picks.len() < config.pick_count {
            debug!(
                "attempt {attempt}: only {} eligible words, need {}",
                picks.len(),
                config.pick_count
            );
            continue;
        }

        let answer = picks[rng::index(&mut rng, picks.len())].clone();
        let pool = build_candidate_clues(&answer, &picks, &mut rng);
        let clues = select_clues(&mut rng, config, &picks, &answer, &pool);

        if clues.len() != config.clue_count {
            debug!(
                "attempt {attempt}: {} clue(s) accepted for {answer} from a pool of {}",
                clues.len(),
                pool.len()
            );
            continue;
        }

        if solve(&picks, &clues) == [answer.as_str()] {
            debug!("seed {seed}: puzzle found on attempt {attempt}");
            return Generated {
                puzzle: Puzzle {
                    picks,
                    answer,
                    clues,
                },
                origin: Origin::Search { attempt },
            };
        }
    }

    warn!(
        "seed {seed}: no puzzle after {} attempts, using fallback",
        config.outer_tries
    );
    Generated {
        puzzle: fallback_puzzle(words, config.pick_count),
        origin: Origin::Fallback,
    }
}

/// Shuffle an uppercased copy of the list and take the first distinct eligible words
fn pick_distinct<R: Rng + ?Sized, W: AsRef<str>>(
    rng: &mut R,
    words: &[W],
    config: &GeneratorConfig,
) -> Vec<String> {
    let mut pool: Vec<String> = words.iter().map(|w| w.as_ref().to_uppercase()).collect();
    pool.shuffle(rng);

    let mut seen = FxHashSet::default();
    let mut picks = Vec::with_capacity(config.pick_count);
    for word in pool {
        if word.is_empty() || letters::len(&word) < config.min_word_len || !seen.insert(word.clone())
        {
            continue;
        }
        picks.push(word);
        if picks.len() == config.pick_count {
            break;
        }
    }
    picks
}

/// Greedily accept pool clues of unused kinds that keep the answer and narrow the picks
fn select_clues<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    picks: &[String],
    answer: &str,
    pool: &[Clue],
) -> Vec<Clue> {
    let mut clues: Vec<Clue> = Vec::with_capacity(config.clue_count);
    let mut used: FxHashSet<ClueKind> = FxHashSet::default();
    let mut remaining = picks.len();

    for _ in 0..config.inner_tries {
        if clues.len() >= config.clue_count || pool.is_empty() {
            break;
        }

        let clue = &pool[rng::index(rng, pool.len())];
        if used.contains(&clue.kind()) {
            continue;
        }

        clues.push(clue.clone());
        let next = solve(picks, &clues);
        if !next.iter().any(|w| w == answer) || !config.narrowing.accepts(remaining, next.len()) {
            clues.pop();
            continue;
        }

        used.insert(clue.kind());
        remaining = next.len();
    }

    clues
}

/// The fixed puzzle used when generation gives up
///
/// Picks are the first `pick_count` words uppercased, the answer is the first
/// of them. Never panics, though with fewer than `pick_count` words the result
/// is short, and with no usable first word the answer is [`FALLBACK_ANSWER`].
#[must_use]
pub fn fallback_puzzle<W: AsRef<str>>(words: &[W], pick_count: usize) -> Puzzle {
    let picks: Vec<String> = words
        .iter()
        .take(pick_count)
        .map(|w| w.as_ref().to_uppercase())
        .collect();
    let answer = picks
        .first()
        .filter(|w| !w.is_empty())
        .cloned()
        .unwrap_or_else(|| FALLBACK_ANSWER.to_string());

    let first = answer.chars().next().unwrap_or_default();
    let last = answer.chars().last().unwrap_or_default();
    let clues = vec![
        Clue::StartsWith { letter: first },
        Clue::EndsWith { letter: last },
        Clue::VowelCount {
            count: letters::vowel_count(&answer),
        },
        Clue::ConsonantCount {
            count: letters::consonant_count(&answer),
        },
        Clue::LetterAtPos {
            pos: 1,
            letter: first,
        },
    ];

    Puzzle {
        picks,
        answer,
        clues,
    }
}
