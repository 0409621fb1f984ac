//! Definition lookup command

use crate::core::{Definition, Word};
use crate::lexicon::Lexicon;
use std::sync::Arc;

/// Result of looking up a word
pub struct DefineResult {
    pub word: Word,
    /// Whether the providers recognise the word
    pub known: bool,
    pub definition: Arc<Definition>,
}

/// Look up a single word
///
/// # Errors
///
/// Returns an error if the input is not a single `a-z` word.
pub async fn define_word(lexicon: &Lexicon, input: &str) -> Result<DefineResult, String> {
    let word = Word::new(input).map_err(|e| format!("Invalid word: {e}"))?;
    let (known, definition) = tokio::join!(
        lexicon.is_valid_word(word.text()),
        lexicon.definition(word.text())
    );

    Ok(DefineResult {
        word,
        known,
        definition,
    })
}
