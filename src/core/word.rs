//! Word representation and normalization
//!
//! Every entry point normalizes input (trim + lowercase) before comparing,
//! caching or validating it. A `Word` is a normalized, non-empty `[a-z]+` string.

use std::fmt;

/// A normalized puzzle word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters(text) => {
                write!(f, "Word '{text}' must contain only letters a-z")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Trim and lowercase a raw input string
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check a (normalized) string against `[a-z]+`
#[inline]
#[must_use]
pub fn is_alphabetic(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_lowercase())
}

/// Same length and exactly one differing character position
///
/// Symmetric; false for words of different length and for equal words.
#[must_use]
pub fn differs_by_one_letter(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diffs = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        if x != y {
            diffs += 1;
            if diffs > 1 {
                return false;
            }
        }
    }
    diffs == 1
}

impl Word {
    /// Create a new Word from raw input
    ///
    /// # Errors
    /// Returns `WordError` if the normalized text is empty or contains
    /// anything outside `a-z`.
    ///
    /// # Examples
    /// ```
    /// use pivot_words::core::Word;
    ///
    /// let word = Word::new("  Cold ").unwrap();
    /// assert_eq!(word.text(), "cold");
    ///
    /// assert!(Word::new("ice cream").is_err());
    /// assert!(Word::new("c0ld").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !is_alphabetic(&text) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self(text))
    }

    /// Wrap a string already known to match `[a-z]+`
    pub(crate) fn from_static(text: &'static str) -> Self {
        debug_assert!(is_alphabetic(text), "not a normalized word: {text}");
        Self(text.to_string())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a `Word` is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One-letter substitution away from `other`
    #[inline]
    #[must_use]
    pub fn is_one_letter_from(&self, other: &Self) -> bool {
        differs_by_one_letter(&self.0, &other.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cold").unwrap();
        assert_eq!(word.text(), "cold");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_normalizes() {
        assert_eq!(Word::new("GOLD").unwrap().text(), "gold");
        assert_eq!(Word::new("  GiLdEd\t").unwrap().text(), "gilded");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("c0ld").is_err()); // Number
        assert!(Word::new("ice cream").is_err()); // Inner space
        assert!(Word::new("don't").is_err()); // Punctuation
        assert!(Word::new("café").is_err()); // Non-ASCII
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["Cold", "  WARM ", "x", "", "MiXeD CaSe", "\tgold\n"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {raw:?}");
        }
    }

    #[test]
    fn alphabetic_pattern() {
        assert!(is_alphabetic("gold"));
        assert!(!is_alphabetic(""));
        assert!(!is_alphabetic("gold1"));
        assert!(!is_alphabetic("Gold"));
        assert!(!is_alphabetic("go-ld"));
    }

    #[test]
    fn one_letter_difference() {
        assert!(differs_by_one_letter("cold", "gold"));
        assert!(differs_by_one_letter("cold", "cord"));
        assert!(!differs_by_one_letter("cold", "gild"));
        assert!(!differs_by_one_letter("cold", "cold"));
        assert!(!differs_by_one_letter("cold", "colds"));
        assert!(!differs_by_one_letter("", ""));
    }

    #[test]
    fn one_letter_difference_is_symmetric() {
        let words = ["cold", "gold", "bold", "gild", "golds", "warm", "word"];
        for a in words {
            for b in words {
                assert_eq!(
                    differs_by_one_letter(a, b),
                    differs_by_one_letter(b, a),
                    "asymmetric for {a}/{b}"
                );
            }
        }
    }

    #[test]
    fn word_one_letter_from() {
        let cold = Word::new("cold").unwrap();
        let gold = Word::new("gold").unwrap();
        assert!(cold.is_one_letter_from(&gold));
        assert!(!cold.is_one_letter_from(&cold));
    }

    #[test]
    fn word_display() {
        let word = Word::new("Gilded").unwrap();
        assert_eq!(format!("{word}"), "gilded");
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("cold").unwrap(), Word::new("COLD").unwrap());
        assert_ne!(Word::new("cold").unwrap(), Word::new("gold").unwrap());
    }
}
