//! In-memory lexical provider
//!
//! Deterministic canned responses for tests and offline use. Every call is
//! counted so memoization can be asserted, and the whole provider can be
//! switched into an outage with `failing()` / `set_failing`.

use super::source::{LexicalSource, RankedWord, Relation};
use crate::core::{Definition, Meaning, Sense, normalize};
use crate::error::{LexiconError, Result};
use async_trait::async_trait;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
struct CallCounts {
    dictionary: AtomicUsize,
    spelling: AtomicUsize,
    tagged: AtomicUsize,
    related: AtomicUsize,
    ranked: AtomicUsize,
}

#[derive(Default)]
pub struct MemoryLexicon {
    entries: FxHashMap<String, Definition>,
    spellings: FxHashSet<String>,
    tagged: FxHashMap<String, Vec<String>>,
    relations: FxHashMap<(Relation, String), Vec<String>>,
    ranked: Vec<RankedWord>,
    failing: AtomicBool,
    calls: CallCounts,
}

impl MemoryLexicon {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dictionary entry with a generic gloss
    #[must_use]
    pub fn with_entry(self, word: &str) -> Self {
        let word = normalize(word);
        let definition = Definition {
            word: word.clone(),
            phonetic: String::new(),
            meanings: vec![Meaning {
                part_of_speech: "noun".to_string(),
                senses: vec![Sense {
                    definition: format!("dictionary entry for {word}"),
                    example: None,
                }],
            }],
        };
        self.with_definition(definition)
    }

    /// Add a full dictionary entry
    #[must_use]
    pub fn with_definition(mut self, definition: Definition) -> Self {
        self.entries.insert(normalize(&definition.word), definition);
        self
    }

    /// Make `word` known to the spelling search only
    #[must_use]
    pub fn with_spelling(mut self, word: &str) -> Self {
        self.spellings.insert(normalize(word));
        self
    }

    /// Secondary `pos\tdefinition` strings for `word`
    #[must_use]
    pub fn with_tagged(mut self, word: &str, tagged: &[&str]) -> Self {
        self.tagged.insert(
            normalize(word),
            tagged.iter().map(ToString::to_string).collect(),
        );
        self
    }

    #[must_use]
    pub fn with_synonyms(self, word: &str, synonyms: &[&str]) -> Self {
        self.with_relation(Relation::Synonym, word, synonyms)
    }

    #[must_use]
    pub fn with_means_like(self, word: &str, related: &[&str]) -> Self {
        self.with_relation(Relation::MeansLike, word, related)
    }

    fn with_relation(mut self, relation: Relation, word: &str, related: &[&str]) -> Self {
        self.relations
            .entry((relation, normalize(word)))
            .or_default()
            .extend(related.iter().map(ToString::to_string));
        self
    }

    /// Add a dictionary word to the frequency-ranked list
    #[must_use]
    pub fn with_ranked(self, word: &str, zipf: f64) -> Self {
        let mut lexicon = self.with_entry(word);
        lexicon.ranked.push(RankedWord::new(normalize(word), zipf));
        lexicon
    }

    /// Start in outage mode: every call fails
    #[must_use]
    pub fn failing(self) -> Self {
        self.failing.store(true, Ordering::SeqCst);
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn dictionary_calls(&self) -> usize {
        self.calls.dictionary.load(Ordering::SeqCst)
    }

    pub fn spelling_calls(&self) -> usize {
        self.calls.spelling.load(Ordering::SeqCst)
    }

    pub fn tagged_calls(&self) -> usize {
        self.calls.tagged.load(Ordering::SeqCst)
    }

    pub fn related_calls(&self) -> usize {
        self.calls.related.load(Ordering::SeqCst)
    }

    pub fn ranked_calls(&self) -> usize {
        self.calls.ranked.load(Ordering::SeqCst)
    }

    fn record(&self, counter: &AtomicUsize) -> Result<()> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(LexiconError::Unavailable("memory lexicon is failing".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl LexicalSource for MemoryLexicon {
    async fn dictionary_entry(&self, word: &str) -> Result<Option<Definition>> {
        self.record(&self.calls.dictionary)?;
        Ok(self.entries.get(word).cloned())
    }

    async fn spelling_matches(&self, word: &str) -> Result<Vec<String>> {
        self.record(&self.calls.spelling)?;
        let known = self.spellings.contains(word) || self.entries.contains_key(word);
        Ok(if known { vec![word.to_string()] } else { Vec::new() })
    }

    async fn tagged_definitions(&self, word: &str) -> Result<Option<Vec<String>>> {
        self.record(&self.calls.tagged)?;
        Ok(self.tagged.get(word).cloned())
    }

    async fn related_words(&self, word: &str, relation: Relation) -> Result<Vec<String>> {
        self.record(&self.calls.related)?;
        Ok(self
            .relations
            .get(&(relation, word.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn words_of_length(&self, length: usize) -> Result<Vec<RankedWord>> {
        self.record(&self.calls.ranked)?;
        Ok(self
            .ranked
            .iter()
            .filter(|r| r.word.len() == length)
            .cloned()
            .collect())
    }
}
