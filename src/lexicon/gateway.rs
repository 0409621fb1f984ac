//! Memoized lexical gateway
//!
//! Wraps a `LexicalSource` with three session-lifetime caches and the
//! per-operation failure policy. Callers never see a provider error.

use super::cache::MemoCache;
use super::source::{LexicalSource, RankedWord, Relation};
use crate::core::{Definition, is_alphabetic, normalize};
use crate::error::Result;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Validity reported when every provider fails (fail-open: never block play
/// on an outage)
pub const VALIDITY_ON_PROVIDER_FAILURE: bool = true;

/// Synonyms reported when the provider fails (fail-closed: no relation is
/// assumed). Deliberately asymmetric with `VALIDITY_ON_PROVIDER_FAILURE`.
pub const SYNONYMS_ON_PROVIDER_FAILURE: &[&str] = &[];

/// Normalized related words of a query word, excluding the query itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymSet(FxHashSet<String>);

impl SynonymSet {
    /// Union raw relation results: lowercase, alphabetic, not the query word
    pub fn from_related(query: &str, raw: impl IntoIterator<Item = String>) -> Self {
        Self(
            raw.into_iter()
                .map(|w| w.to_lowercase())
                .filter(|w| w != query && is_alphabetic(w))
                .collect(),
        )
    }

    fn on_failure() -> Self {
        Self(
            SYNONYMS_ON_PROVIDER_FAILURE
                .iter()
                .map(ToString::to_string)
                .collect(),
        )
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Cached access to word validity, definitions and synonyms
pub struct Lexicon {
    source: Arc<dyn LexicalSource>,
    validity: MemoCache<bool>,
    definitions: MemoCache<Arc<Definition>>,
    synonyms: MemoCache<Arc<SynonymSet>>,
}

impl Lexicon {
    pub fn new(source: Arc<dyn LexicalSource>) -> Self {
        Self {
            source,
            validity: MemoCache::new(),
            definitions: MemoCache::new(),
            synonyms: MemoCache::new(),
        }
    }

    /// Is `word` a real English word?
    ///
    /// Dictionary first, then an exact top hit from the spelling search.
    /// Provider failure yields `VALIDITY_ON_PROVIDER_FAILURE`.
    pub async fn is_valid_word(&self, word: &str) -> bool {
        let word = normalize(word);
        if let Some(valid) = self.validity.get(&word) {
            debug!(%word, valid, "validity cache hit");
            return valid;
        }

        let valid = match self.lookup_validity(&word).await {
            Ok(valid) => valid,
            Err(e) => {
                warn!(%word, error = %e, "validity lookup failed, accepting word");
                VALIDITY_ON_PROVIDER_FAILURE
            }
        };
        self.validity.insert(&word, valid)
    }

    async fn lookup_validity(&self, word: &str) -> Result<bool> {
        if self.source.dictionary_entry(word).await?.is_some() {
            return Ok(true);
        }

        let matches = self.source.spelling_matches(word).await?;
        Ok(matches.first().is_some_and(|top| normalize(top) == word))
    }

    /// Definition of `word`; always returns something
    ///
    /// Dictionary first, then tab-delimited secondary definitions, then a
    /// placeholder.
    pub async fn definition(&self, word: &str) -> Arc<Definition> {
        let word = normalize(word);
        if let Some(definition) = self.definitions.get(&word) {
            debug!(%word, "definition cache hit");
            return definition;
        }

        let definition = match self.lookup_definition(&word).await {
            Ok(Some(definition)) => definition,
            Ok(None) => {
                debug!(%word, "no definition found, using placeholder");
                Definition::placeholder(&word)
            }
            Err(e) => {
                warn!(%word, error = %e, "definition lookup failed, using placeholder");
                Definition::placeholder(&word)
            }
        };
        self.definitions.insert(&word, Arc::new(definition))
    }

    async fn lookup_definition(&self, word: &str) -> Result<Option<Definition>> {
        if let Some(definition) = self.source.dictionary_entry(word).await? {
            return Ok(Some(definition));
        }

        Ok(self
            .source
            .tagged_definitions(word)
            .await?
            .filter(|tagged| !tagged.is_empty())
            .map(|tagged| Definition::from_tagged(word, &tagged)))
    }

    /// Direct synonyms and "means like" words of `word`
    ///
    /// Both relations are requested concurrently. If either fails the result
    /// is `SYNONYMS_ON_PROVIDER_FAILURE`.
    pub async fn synonyms(&self, word: &str) -> Arc<SynonymSet> {
        let word = normalize(word);
        if let Some(synonyms) = self.synonyms.get(&word) {
            debug!(%word, "synonym cache hit");
            return synonyms;
        }

        let (direct, means_like) = tokio::join!(
            self.source.related_words(&word, Relation::Synonym),
            self.source.related_words(&word, Relation::MeansLike),
        );

        let synonyms = match (direct, means_like) {
            (Ok(direct), Ok(means_like)) => {
                SynonymSet::from_related(&word, direct.into_iter().chain(means_like))
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(%word, error = %e, "synonym lookup failed, assuming none");
                SynonymSet::on_failure()
            }
        };
        debug!(%word, count = synonyms.len(), "synonyms fetched");
        self.synonyms.insert(&word, Arc::new(synonyms))
    }

    /// Frequency-ranked words of one length, uncached
    ///
    /// # Errors
    /// Returns the provider error; puzzle generation decides the fallback.
    pub async fn words_of_length(&self, length: usize) -> Result<Vec<RankedWord>> {
        self.source.words_of_length(length).await
    }
}
