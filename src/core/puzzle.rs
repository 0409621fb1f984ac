//! Puzzles and move classification

use super::Word;
use std::fmt;

/// Start word used when no word can be sampled
pub const FALLBACK_START: &str = "love";

/// Last-resort targets, tried in order. No word is one letter away from
/// both, so one of them always forms a valid puzzle with any start.
pub const FALLBACK_TARGETS: [&str; 2] = ["love", "time"];

/// How an accepted move relates two consecutive chain words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Same length, exactly one letter substituted
    LetterChange,
    /// The words are synonyms (in either direction)
    SynonymSwap,
}

impl MoveKind {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LetterChange => "Letter change",
            Self::SynonymSwap => "Synonym swap",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type for degenerate puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    SameWord(Word),
    OneLetterApart(Word, Word),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameWord(word) => write!(f, "Start and target are both '{word}'"),
            Self::OneLetterApart(start, target) => {
                write!(f, "'{start}' and '{target}' are only one letter apart")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// A START/TARGET pair
///
/// Start and target are distinct and not one letter apart. The "not direct
/// synonyms" rule needs lexical lookups and is enforced by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    start: Word,
    target: Word,
}

impl Puzzle {
    /// Create a puzzle, rejecting trivially solvable pairs
    ///
    /// # Errors
    /// Returns `PuzzleError` if the words are equal or one letter apart.
    pub fn new(start: Word, target: Word) -> Result<Self, PuzzleError> {
        if start == target {
            return Err(PuzzleError::SameWord(start));
        }
        if start.is_one_letter_from(&target) {
            return Err(PuzzleError::OneLetterApart(start, target));
        }
        Ok(Self { start, target })
    }

    /// Hardcoded pair for when no provider can supply words
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            start: Word::from_static(FALLBACK_START),
            target: Word::from_static(FALLBACK_TARGETS[1]),
        }
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> &Word {
        &self.start
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn puzzle_valid_pair() {
        let puzzle = Puzzle::new(word("cold"), word("gilded")).unwrap();
        assert_eq!(puzzle.start().text(), "cold");
        assert_eq!(puzzle.target().text(), "gilded");
        assert_eq!(puzzle.to_string(), "cold → gilded");
    }

    #[test]
    fn puzzle_rejects_same_word() {
        assert_eq!(
            Puzzle::new(word("cold"), word("COLD")),
            Err(PuzzleError::SameWord(word("cold")))
        );
    }

    #[test]
    fn puzzle_rejects_one_letter_neighbors() {
        assert!(matches!(
            Puzzle::new(word("cold"), word("gold")),
            Err(PuzzleError::OneLetterApart(_, _))
        ));
    }

    #[test]
    fn fallback_pair_is_valid() {
        let fallback = Puzzle::fallback();
        assert_eq!(
            Puzzle::new(fallback.start().clone(), fallback.target().clone()),
            Ok(fallback)
        );
    }

    #[test]
    fn fallback_targets_cover_every_start() {
        for start in ["love", "time", "live", "tile", "lime", "dove", "cold"] {
            let start = word(start);
            let usable = FALLBACK_TARGETS
                .iter()
                .filter(|t| Puzzle::new(start.clone(), word(t)).is_ok())
                .count();
            assert!(usable >= 1, "no fallback target for {start}");
        }
    }

    #[test]
    fn move_kind_labels() {
        assert_eq!(MoveKind::LetterChange.to_string(), "Letter change");
        assert_eq!(MoveKind::SynonymSwap.to_string(), "Synonym swap");
    }
}
