//! Lexical provider contract
//!
//! The engine depends only on this trait. `HttpLexicon` implements it against
//! public web APIs; `MemoryLexicon` implements it with canned data for tests.

use crate::core::Definition;
use crate::error::Result;
use async_trait::async_trait;

/// Word relations the synonym provider understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Direct synonym
    Synonym,
    /// Broader "means like" relation
    MeansLike,
}

/// A word annotated with its Zipf usage frequency (0.0 when unknown)
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWord {
    pub word: String,
    pub zipf: f64,
}

impl RankedWord {
    pub fn new(word: impl Into<String>, zipf: f64) -> Self {
        Self {
            word: word.into(),
            zipf,
        }
    }
}

/// Raw access to the external lexical providers
///
/// Words passed in are already normalized. `Ok(None)` means the provider
/// answered but has no entry; `Err` means the provider could not be reached
/// or returned garbage.
#[async_trait]
pub trait LexicalSource: Send + Sync {
    /// Structured dictionary entry (phonetic, meanings, examples)
    async fn dictionary_entry(&self, word: &str) -> Result<Option<Definition>>;

    /// Spelling search; the best match comes first
    async fn spelling_matches(&self, word: &str) -> Result<Vec<String>>;

    /// Secondary definitions as `partOfSpeech\tdefinition` strings
    async fn tagged_definitions(&self, word: &str) -> Result<Option<Vec<String>>>;

    /// Words standing in `relation` to `word`, raw (not filtered)
    async fn related_words(&self, word: &str, relation: Relation) -> Result<Vec<String>>;

    /// Words with exactly `length` letters, annotated with usage frequency
    async fn words_of_length(&self, length: usize) -> Result<Vec<RankedWord>>;
}
