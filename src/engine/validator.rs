//! Move validation
//!
//! Checks run in a fixed order and stop at the first failure, so the reason
//! shown to the player is always the first rule the move breaks.

use crate::core::{MoveKind, Word, differs_by_one_letter, is_alphabetic, normalize};
use crate::lexicon::Lexicon;
use std::fmt;
use tracing::debug;

/// Why a move was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    SameWord,
    AlreadyUsed,
    NotAlphabetic,
    UnknownWord(String),
    NoRelation,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameWord => write!(f, "Same word, try something different!"),
            Self::AlreadyUsed => write!(f, "You already used that word!"),
            Self::NotAlphabetic => write!(f, "Only letters allowed, no spaces or symbols"),
            Self::UnknownWord(word) => {
                write!(f, "\"{word}\" does not seem to be a valid English word")
            }
            Self::NoRelation => write!(f, "Not a valid letter change or synonym swap"),
        }
    }
}

/// Outcome of validating one move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Accepted {
        word: Word,
        kind: MoveKind,
        /// Display-only note, e.g. "synonym of cold"
        gloss: Option<String>,
    },
    Rejected(Rejection),
}

impl Validation {
    fn synonym_of(word: Word, prev: &str) -> Self {
        Self::Accepted {
            word,
            kind: MoveKind::SynonymSwap,
            gloss: Some(format!("synonym of {prev}")),
        }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Decide whether `next` may follow `prev`
///
/// Order: same word, already in chain, `[a-z]+`, real word, one-letter
/// change, forward synonym, reverse synonym. Reaching the target is allowed
/// at any move; `_target` is accepted for interface completeness only.
pub async fn validate_move(
    lexicon: &Lexicon,
    prev: &str,
    next: &str,
    chain: &[Word],
    _target: &Word,
) -> Validation {
    let prev = normalize(prev);
    let next = normalize(next);

    if next == prev {
        return Validation::Rejected(Rejection::SameWord);
    }

    if chain.iter().any(|w| w.text() == next) {
        return Validation::Rejected(Rejection::AlreadyUsed);
    }

    if !is_alphabetic(&next) {
        return Validation::Rejected(Rejection::NotAlphabetic);
    }

    if !lexicon.is_valid_word(&next).await {
        return Validation::Rejected(Rejection::UnknownWord(next));
    }

    let Ok(word) = Word::new(&next) else {
        return Validation::Rejected(Rejection::NotAlphabetic);
    };

    if differs_by_one_letter(&prev, &next) {
        return Validation::Accepted {
            word,
            kind: MoveKind::LetterChange,
            gloss: None,
        };
    }

    if lexicon.synonyms(&prev).await.contains(&next) {
        return Validation::synonym_of(word, &prev);
    }

    // Synonym graphs are often one-directional
    if lexicon.synonyms(&next).await.contains(&prev) {
        debug!(%prev, %next, "accepted via reverse synonym");
        return Validation::synonym_of(word, &prev);
    }

    Validation::Rejected(Rejection::NoRelation)
}
