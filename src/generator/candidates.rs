//! Candidate clue pool for a chosen answer
//!
//! Proposes a fixed menu of clues derived from the answer and the other picks,
//! keeps only those the answer satisfies, and shuffles the survivors.
//!
//! The order of random draws below is part of the output: moving a draw changes
//! every puzzle generated from a given seed.

use super::rng;
use crate::core::{Clue, letters};
use crate::solver::solve;
use rand::Rng;
use rand::seq::SliceRandom;

/// Upper bound for the `n` of a shared-letters clue
const MAX_SHARED_LETTERS: usize = 4;

/// Build the shuffled pool of clues that hold for `answer`
///
/// `picks` is expected to contain `answer` exactly once. An empty answer yields
/// an empty pool.
///
/// `NotContains` draws its letter from the answer itself, so it is proposed and
/// then always discarded by the truth filter. It still consumes its draw.
pub fn build_candidate_clues<R: Rng + ?Sized>(
    answer: &str,
    picks: &[String],
    rng: &mut R,
) -> Vec<Clue> {
    let chars: Vec<char> = answer.chars().collect();
    let (Some(&first), Some(&last)) = (chars.first(), chars.last()) else {
        return Vec::new();
    };
    let others: Vec<&str> = picks
        .iter()
        .map(String::as_str)
        .filter(|&word| word != answer)
        .collect();

    let mut candidates = vec![
        Clue::StartsWith { letter: first },
        Clue::EndsWith { letter: last },
        Clue::VowelCount {
            count: letters::vowel_count(answer),
        },
        Clue::ConsonantCount {
            count: letters::consonant_count(answer),
        },
        Clue::NoRepeatLetters,
    ];

    candidates.push(Clue::Contains {
        letter: chars[rng::index(rng, chars.len())],
    });
    candidates.push(Clue::NotContains {
        letter: chars[rng::index(rng, chars.len())],
    });

    let pos = rng::index(rng, chars.len()) + 1;
    candidates.push(Clue::LetterAtPos {
        pos,
        letter: chars[pos - 1],
    });

    if letters::has_double_letter(answer) {
        candidates.push(Clue::HasDoubleLetter);
    }

    let distinct = letters::distinct_letters(answer);
    let letter = distinct[rng::index(rng, distinct.len())];
    candidates.push(Clue::ContainsExactly {
        letter,
        count: letters::count_letter(answer, letter),
    });

    if !others.is_empty() {
        let reference = others[rng::index(rng, others.len())];
        candidates.push(Clue::AlphaAfter {
            word: reference.to_string(),
        });
        candidates.push(Clue::AlphaBefore {
            word: reference.to_string(),
        });

        let reference = others[rng::index(rng, others.len())];
        let shared = letters::shared_letters(answer, reference);
        candidates.push(Clue::SharedLettersAtLeast {
            word: reference.to_string(),
            n: shared.clamp(1, MAX_SHARED_LETTERS),
        });

        let reference = others[rng::index(rng, others.len())];
        candidates.push(Clue::NotWord {
            word: reference.to_string(),
        });
    }

    let mut pool: Vec<Clue> = candidates
        .into_iter()
        .filter(|clue| solve(&[answer], std::slice::from_ref(clue)).len() == 1)
        .collect();

    pool.shuffle(rng);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClueKind;
    use crate::generator::rng::seeded;
    use crate::solver::satisfies;
    use std::collections::BTreeSet;

    fn picks() -> Vec<String> {
        ["APPLE", "GRAPE", "LEMON", "MELON", "PEACH"]
            .map(String::from)
            .to_vec()
    }

    fn kinds(pool: &[Clue]) -> BTreeSet<ClueKind> {
        pool.iter().map(Clue::kind).collect()
    }

    #[test]
    fn every_clue_holds_for_answer() {
        for seed in ["a", "b", "c", "d", "e", "f"] {
            for answer in picks() {
                let pool = build_candidate_clues(&answer, &picks(), &mut seeded(seed));
                assert!(!pool.is_empty());
                for clue in &pool {
                    assert!(satisfies(&answer, clue), "{clue:?} false for {answer}");
                }
            }
        }
    }

    #[test]
    fn not_contains_never_survives() {
        for seed in ["a", "b", "c", "d", "e", "f", "g", "h"] {
            for answer in picks() {
                let pool = build_candidate_clues(&answer, &picks(), &mut seeded(seed));
                assert!(!kinds(&pool).contains(&ClueKind::NotContains));
            }
        }
    }

    #[test]
    fn pool_kinds_for_apple() {
        // APPLE: doubled P, repeated letters, alphabetically first, shares a
        // letter with every other pick.
        let expected: BTreeSet<ClueKind> = [
            ClueKind::StartsWith,
            ClueKind::EndsWith,
            ClueKind::VowelCount,
            ClueKind::ConsonantCount,
            ClueKind::Contains,
            ClueKind::LetterAtPos,
            ClueKind::HasDoubleLetter,
            ClueKind::ContainsExactly,
            ClueKind::AlphaBefore,
            ClueKind::SharedLettersAtLeast,
            ClueKind::NotWord,
        ]
        .into_iter()
        .collect();

        for seed in ["x", "y", "z"] {
            let pool = build_candidate_clues("APPLE", &picks(), &mut seeded(seed));
            assert_eq!(pool.len(), expected.len());
            assert_eq!(kinds(&pool), expected);
        }
    }

    #[test]
    fn exactly_one_alphabetical_clue_survives() {
        for seed in ["p", "q", "r", "s"] {
            for answer in picks() {
                let pool = build_candidate_clues(&answer, &picks(), &mut seeded(seed));
                let alpha = pool
                    .iter()
                    .filter(|c| matches!(c.kind(), ClueKind::AlphaAfter | ClueKind::AlphaBefore))
                    .count();
                assert_eq!(alpha, 1);
            }
        }
    }

    #[test]
    fn shared_letters_threshold_is_clamped() {
        for seed in ["1", "2", "3", "4", "5"] {
            let pool = build_candidate_clues("GRAPE", &picks(), &mut seeded(seed));
            for clue in &pool {
                if let Clue::SharedLettersAtLeast { n, .. } = clue {
                    assert!((1..=MAX_SHARED_LETTERS).contains(n));
                }
            }
        }
    }

    #[test]
    fn reference_words_come_from_other_picks() {
        let pool = build_candidate_clues("LEMON", &picks(), &mut seeded("refs"));
        for clue in &pool {
            if let Clue::AlphaAfter { word }
            | Clue::AlphaBefore { word }
            | Clue::SharedLettersAtLeast { word, .. }
            | Clue::NotWord { word } = clue
            {
                assert_ne!(word, "LEMON");
                assert!(picks().contains(word));
            }
        }
    }

    #[test]
    fn lone_answer_has_no_relative_clues() {
        let only = vec!["LEMON".to_string()];
        let pool = build_candidate_clues("LEMON", &only, &mut seeded("solo"));
        assert!(pool.iter().all(|c| !matches!(
            c.kind(),
            ClueKind::AlphaAfter
                | ClueKind::AlphaBefore
                | ClueKind::SharedLettersAtLeast
                | ClueKind::NotWord
        )));
        assert!(kinds(&pool).contains(&ClueKind::NoRepeatLetters));
    }

    #[test]
    fn empty_answer_gives_empty_pool() {
        assert!(build_candidate_clues("", &picks(), &mut seeded("empty")).is_empty());
    }

    #[test]
    fn same_seed_same_pool() {
        let a = build_candidate_clues("PEACH", &picks(), &mut seeded("same"));
        let b = build_candidate_clues("PEACH", &picks(), &mut seeded("same"));
        assert_eq!(a, b);
    }

    #[test]
    fn pool_for_seed_is_pinned() {
        let pool = build_candidate_clues("PEACH", &picks(), &mut seeded("same"));
        assert_eq!(
            pool,
            vec![
                Clue::EndsWith { letter: 'H' },
                Clue::ConsonantCount { count: 3 },
                Clue::NoRepeatLetters,
                Clue::AlphaAfter {
                    word: "MELON".to_string()
                },
                Clue::ContainsExactly {
                    letter: 'P',
                    count: 1
                },
                Clue::VowelCount { count: 2 },
                Clue::Contains { letter: 'C' },
                Clue::LetterAtPos {
                    pos: 3,
                    letter: 'A'
                },
                Clue::NotWord {
                    word: "APPLE".to_string()
                },
                Clue::StartsWith { letter: 'P' },
                Clue::SharedLettersAtLeast {
                    word: "GRAPE".to_string(),
                    n: 3
                },
            ]
        );
    }
}
