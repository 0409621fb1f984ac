//! Single-move check command
//!
//! Runs the move validator for one step outside of a game.

use crate::core::Word;
use crate::engine::{Validation, validate_move};
use crate::lexicon::Lexicon;

/// Validate `next` as a move from `prev`
///
/// # Errors
///
/// Returns an error if `prev` is not a single `a-z` word. Problems with
/// `next` are reported as a rejection, as they would be in a game.
pub async fn check_move(lexicon: &Lexicon, prev: &str, next: &str) -> Result<Validation, String> {
    let prev = Word::new(prev).map_err(|e| format!("Invalid starting word: {e}"))?;
    let chain = [prev.clone()];
    Ok(validate_move(lexicon, prev.text(), next, &chain, &prev).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoveKind;
    use crate::engine::Rejection;
    use crate::lexicon::MemoryLexicon;
    use std::sync::Arc;

    fn lexicon() -> Lexicon {
        Lexicon::new(Arc::new(
            MemoryLexicon::new()
                .with_entry("cold")
                .with_entry("gold")
                .with_entry("chilly")
                .with_entry("warm")
                .with_synonyms("cold", &["chilly"]),
        ))
    }

    #[tokio::test]
    async fn letter_change_accepted() {
        let result = check_move(&lexicon(), "cold", "gold").await.unwrap();
        assert!(matches!(
            result,
            Validation::Accepted {
                kind: MoveKind::LetterChange,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn synonym_accepted_with_gloss() {
        let result = check_move(&lexicon(), "COLD", "chilly").await.unwrap();
        assert_eq!(
            result,
            Validation::Accepted {
                word: Word::new("chilly").unwrap(),
                kind: MoveKind::SynonymSwap,
                gloss: Some("synonym of cold".into()),
            }
        );
    }

    #[tokio::test]
    async fn unrelated_word_rejected() {
        let result = check_move(&lexicon(), "cold", "warm").await.unwrap();
        assert_eq!(result, Validation::Rejected(Rejection::NoRelation));
    }

    #[tokio::test]
    async fn invalid_prev_is_error() {
        assert!(check_move(&lexicon(), "c0ld", "gold").await.is_err());
    }
}
