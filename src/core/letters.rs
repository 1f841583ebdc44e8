//! Letter analysis helpers
//!
//! Words are uppercase strings; every count here is in `char`s, and no
//! letter-validity check is performed (a digit counts as a consonant).

use rustc_hash::FxHashSet;

/// The letters counted as vowels
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Number of characters in the word
#[inline]
#[must_use]
pub fn len(word: &str) -> usize {
    word.chars().count()
}

/// Count the vowels in a word
#[must_use]
pub fn vowel_count(word: &str) -> usize {
    word.chars().filter(|ch| VOWELS.contains(ch)).count()
}

/// Count the non-vowel characters in a word
#[must_use]
pub fn consonant_count(word: &str) -> usize {
    len(word) - vowel_count(word)
}

/// Whether any two adjacent characters are equal
#[must_use]
pub fn has_double_letter(word: &str) -> bool {
    word.chars().zip(word.chars().skip(1)).any(|(a, b)| a == b)
}

/// Number of times `letter` occurs in the word
#[must_use]
pub fn count_letter(word: &str, letter: char) -> usize {
    word.chars().filter(|&ch| ch == letter).count()
}

/// Distinct characters, in order of first occurrence
#[must_use]
pub fn distinct_letters(word: &str) -> Vec<char> {
    let mut seen = FxHashSet::default();
    word.chars().filter(|&ch| seen.insert(ch)).collect()
}

/// Whether every character of the word is distinct
#[must_use]
pub fn has_no_repeats(word: &str) -> bool {
    distinct_letters(word).len() == len(word)
}

/// Number of distinct characters present in both words
#[must_use]
pub fn shared_letters(a: &str, b: &str) -> usize {
    let other: FxHashSet<char> = b.chars().collect();
    distinct_letters(a)
        .into_iter()
        .filter(|ch| other.contains(ch))
        .count()
}

/// Character at a 1-based position, if in bounds
#[must_use]
pub fn letter_at(word: &str, pos: usize) -> Option<char> {
    pos.checked_sub(1).and_then(|idx| word.chars().nth(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_and_consonants() {
        assert_eq!(vowel_count("APPLE"), 2);
        assert_eq!(consonant_count("APPLE"), 3);
        assert_eq!(vowel_count("RHYTHM"), 0);
        assert_eq!(consonant_count("RHYTHM"), 6);
    }

    #[test]
    fn non_letters_count_as_consonants() {
        assert_eq!(consonant_count("A1B-"), 3);
    }

    #[test]
    fn double_letters() {
        assert!(has_double_letter("APPLE"));
        assert!(has_double_letter("BOOK"));
        assert!(!has_double_letter("CRANE"));
        assert!(!has_double_letter(""));
        assert!(!has_double_letter("A"));
    }

    #[test]
    fn letter_counts() {
        assert_eq!(count_letter("BANANA", 'A'), 3);
        assert_eq!(count_letter("BANANA", 'N'), 2);
        assert_eq!(count_letter("BANANA", 'Z'), 0);
    }

    #[test]
    fn distinct_letters_keep_first_occurrence_order() {
        assert_eq!(distinct_letters("BANANA"), vec!['B', 'A', 'N']);
        assert_eq!(distinct_letters("SPEED"), vec!['S', 'P', 'E', 'D']);
        assert!(distinct_letters("").is_empty());
    }

    #[test]
    fn repeats() {
        assert!(has_no_repeats("CRANE"));
        assert!(!has_no_repeats("APPLE"));
    }

    #[test]
    fn shared_letters_counts_distinct_overlap() {
        // {A,P,L,E} ∩ {G,R,A,P,E} = {A,P,E}
        assert_eq!(shared_letters("APPLE", "GRAPE"), 3);
        assert_eq!(shared_letters("BANANA", "ANNA"), 2);
        assert_eq!(shared_letters("LYNX", "BOAT"), 0);
    }

    #[test]
    fn letter_at_is_one_based() {
        assert_eq!(letter_at("APPLE", 1), Some('A'));
        assert_eq!(letter_at("APPLE", 5), Some('E'));
        assert_eq!(letter_at("APPLE", 6), None);
        assert_eq!(letter_at("APPLE", 0), None);
    }
}
