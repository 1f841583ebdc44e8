//! Word lists for puzzle generation
//!
//! Provides the embedded source list compiled into the binary, plus loading
//! of custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_ascii_letters() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn enough_pickable_words() {
        let pickable = WORDS.iter().filter(|w| w.len() >= 4).count();
        assert!(pickable >= 100, "only {pickable} words of length >= 4");
    }

    #[test]
    fn first_five_words_are_pickable() {
        // The fallback puzzle is built from these
        assert!(WORDS.len() >= 5);
        assert!(WORDS[..5].iter().all(|w| w.len() >= 4));
    }
}
