//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize one line of a word list
///
/// Trims whitespace and uppercases. Blank lines, `#` comments and entries with
/// anything but ASCII letters are skipped.
#[must_use]
pub fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

/// Parse a word list from text, one word per line
///
/// Order is preserved; the generator's fallback depends on it.
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content.lines().filter_map(normalize).collect()
}

/// Load words from a file
///
/// Returns the valid words in file order, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use dotword::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Convert embedded string slice to an owned uppercase word list
///
/// # Examples
/// ```
/// use dotword::wordlists::loader::words_from_slice;
/// use dotword::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_uppercases() {
        let input = &["crane", "Slate", "IRATE"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "two words", "caf\u{e9}", "", "sl4te", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn words_from_slice_keeps_short_words() {
        // Length filtering belongs to the generator
        let words = words_from_slice(&["ox", "cat"]);
        assert_eq!(words, vec!["OX", "CAT"]);
    }

    #[test]
    fn words_from_str_trims_and_skips_comments() {
        let text = "# fruit\n  apple  \n\nbanana\r\n# end\n";
        assert_eq!(words_from_str(text), vec!["APPLE", "BANANA"]);
    }

    #[test]
    fn load_from_file_reads_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "zebra\napple\nmango").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["ZEBRA", "APPLE", "MANGO"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
