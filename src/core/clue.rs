//! Clue representation
//!
//! A clue is a typed constraint that a candidate word either satisfies or not.
//! The set of clue variants is closed; evaluation lives in [`crate::solver`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single logical clue shown to the player
///
/// Serialized internally tagged, e.g. `{"type":"letterAtPos","pos":1,"letter":"A"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Clue {
    StartsWith { letter: char },
    EndsWith { letter: char },
    VowelCount { count: usize },
    ConsonantCount { count: usize },
    NoRepeatLetters,
    HasDoubleLetter,
    /// `pos` is 1-based
    LetterAtPos { pos: usize, letter: char },
    Contains { letter: char },
    NotContains { letter: char },
    ContainsExactly { letter: char, count: usize },
    AlphaAfter { word: String },
    AlphaBefore { word: String },
    SharedLettersAtLeast { word: String, n: usize },
    NotWord { word: String },
}

/// Payload-free tag of a [`Clue`]
///
/// Two clues of the same kind never appear in one puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClueKind {
    StartsWith,
    EndsWith,
    VowelCount,
    ConsonantCount,
    NoRepeatLetters,
    HasDoubleLetter,
    LetterAtPos,
    Contains,
    NotContains,
    ContainsExactly,
    AlphaAfter,
    AlphaBefore,
    SharedLettersAtLeast,
    NotWord,
}

impl ClueKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 14] = [
        Self::StartsWith,
        Self::EndsWith,
        Self::VowelCount,
        Self::ConsonantCount,
        Self::NoRepeatLetters,
        Self::HasDoubleLetter,
        Self::LetterAtPos,
        Self::Contains,
        Self::NotContains,
        Self::ContainsExactly,
        Self::AlphaAfter,
        Self::AlphaBefore,
        Self::SharedLettersAtLeast,
        Self::NotWord,
    ];

    /// The serialized `type` tag for this kind
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::VowelCount => "vowelCount",
            Self::ConsonantCount => "consonantCount",
            Self::NoRepeatLetters => "noRepeatLetters",
            Self::HasDoubleLetter => "hasDoubleLetter",
            Self::LetterAtPos => "letterAtPos",
            Self::Contains => "contains",
            Self::NotContains => "notContains",
            Self::ContainsExactly => "containsExactly",
            Self::AlphaAfter => "alphaAfter",
            Self::AlphaBefore => "alphaBefore",
            Self::SharedLettersAtLeast => "sharedLettersAtLeast",
            Self::NotWord => "notWord",
        }
    }
}

impl fmt::Display for ClueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Clue {
    /// Get the kind tag of this clue
    #[must_use]
    pub const fn kind(&self) -> ClueKind {
        match self {
            Self::StartsWith { .. } => ClueKind::StartsWith,
            Self::EndsWith { .. } => ClueKind::EndsWith,
            Self::VowelCount { .. } => ClueKind::VowelCount,
            Self::ConsonantCount { .. } => ClueKind::ConsonantCount,
            Self::NoRepeatLetters => ClueKind::NoRepeatLetters,
            Self::HasDoubleLetter => ClueKind::HasDoubleLetter,
            Self::LetterAtPos { .. } => ClueKind::LetterAtPos,
            Self::Contains { .. } => ClueKind::Contains,
            Self::NotContains { .. } => ClueKind::NotContains,
            Self::ContainsExactly { .. } => ClueKind::ContainsExactly,
            Self::AlphaAfter { .. } => ClueKind::AlphaAfter,
            Self::AlphaBefore { .. } => ClueKind::AlphaBefore,
            Self::SharedLettersAtLeast { .. } => ClueKind::SharedLettersAtLeast,
            Self::NotWord { .. } => ClueKind::NotWord,
        }
    }
}

/// Human-readable clue text, as shown to the player
impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartsWith { letter } => write!(f, "Starts with {letter}"),
            Self::EndsWith { letter } => write!(f, "Ends with {letter}"),
            Self::VowelCount { count } => write!(f, "Has exactly {count} vowels"),
            Self::ConsonantCount { count } => write!(f, "Has exactly {count} consonants"),
            Self::NoRepeatLetters => write!(f, "Has no repeated letters"),
            Self::HasDoubleLetter => write!(f, "Has a double letter"),
            Self::LetterAtPos { pos, letter } => write!(f, "Letter {pos} is {letter}"),
            Self::Contains { letter } => write!(f, "Contains the letter {letter}"),
            Self::NotContains { letter } => write!(f, "Does NOT contain the letter {letter}"),
            Self::ContainsExactly { letter, count } => write!(
                f,
                "Contains {letter} exactly {count} time{}",
                if *count == 1 { "" } else { "s" }
            ),
            Self::AlphaAfter { word } => write!(f, "Alphabetically after {word}"),
            Self::AlphaBefore { word } => write!(f, "Alphabetically before {word}"),
            Self::SharedLettersAtLeast { word, n } => {
                write!(f, "Shares at least {n} letters with {word}")
            }
            Self::NotWord { word } => write!(f, "Is NOT {word}"),
        }
    }
}
