//! Core domain types for the word-chain puzzle
//!
//! Pure, synchronous types: words and their normalization, puzzles, move
//! kinds and definitions. Nothing here talks to a lexical provider.

mod definition;
mod puzzle;
mod word;

pub use definition::{DEFAULT_PART_OF_SPEECH, Definition, Meaning, Sense};
pub use puzzle::{FALLBACK_START, FALLBACK_TARGETS, MoveKind, Puzzle, PuzzleError};
pub use word::{Word, WordError, differs_by_one_letter, is_alphabetic, normalize};
