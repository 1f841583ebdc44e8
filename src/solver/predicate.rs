//! Clue evaluation against a single word

use crate::core::{Clue, letters};

/// Check whether `word` satisfies `clue`
///
/// Pure and total: an out-of-range position or an absent letter is simply `false`.
/// Comparison is case-sensitive; words and clue payloads are expected uppercase.
///
/// # Examples
/// ```
/// use dotword::core::Clue;
/// use dotword::solver::satisfies;
///
/// assert!(satisfies("APPLE", &Clue::HasDoubleLetter));
/// assert!(!satisfies("APPLE", &Clue::LetterAtPos { pos: 6, letter: 'X' }));
/// ```
#[must_use]
pub fn satisfies(word: &str, clue: &Clue) -> bool {
    match clue {
        Clue::StartsWith { letter } => word.starts_with(*letter),
        Clue::EndsWith { letter } => word.ends_with(*letter),
        Clue::VowelCount { count } => letters::vowel_count(word) == *count,
        Clue::ConsonantCount { count } => letters::consonant_count(word) == *count,
        Clue::NoRepeatLetters => letters::has_no_repeats(word),
        Clue::HasDoubleLetter => letters::has_double_letter(word),
        Clue::LetterAtPos { pos, letter } => letters::letter_at(word, *pos) == Some(*letter),
        Clue::Contains { letter } => word.contains(*letter),
        Clue::NotContains { letter } => !word.contains(*letter),
        Clue::ContainsExactly { letter, count } => letters::count_letter(word, *letter) == *count,
        Clue::AlphaAfter { word: reference } => word > reference.as_str(),
        Clue::AlphaBefore { word: reference } => word < reference.as_str(),
        Clue::SharedLettersAtLeast { word: reference, n } => {
            letters::shared_letters(word, reference) >= *n
        }
        Clue::NotWord { word: reference } => word != reference.as_str(),
    }
}
