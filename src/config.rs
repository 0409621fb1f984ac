//! Runtime configuration
//!
//! Defaults reproduce the game as it is played; `Config::from_env` lets a
//! deployment point the providers somewhere else.

use std::env;
use std::time::Duration;

/// Lexical provider endpoints and request limits
#[derive(Debug, Clone)]
pub struct LexiconConfig {
    /// Base URL of the structured dictionary provider
    pub dictionary_url: String,
    /// Base URL of the Datamuse-style word provider (spelling, relations, frequency)
    pub datamuse_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Results requested from the spelling fallback
    pub spelling_limit: usize,
    /// Results requested per synonym relation
    pub related_limit: usize,
    /// Results requested from the frequency-ranked word list
    pub ranked_limit: usize,
    /// Senses kept per part of speech
    pub senses_per_meaning: usize,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            dictionary_url: "https://api.dictionaryapi.dev".to_string(),
            datamuse_url: "https://api.datamuse.com".to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("pivot_words/", env!("CARGO_PKG_VERSION")).to_string(),
            spelling_limit: 1,
            related_limit: 200,
            ranked_limit: 1000,
            senses_per_meaning: 2,
        }
    }
}

/// Puzzle generation tuning
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Shortest playable word length (inclusive)
    pub min_length: usize,
    /// Longest playable word length (inclusive)
    pub max_length: usize,
    /// Sampling attempts when building the candidate pool
    pub pool_attempts: usize,
    /// Stop sampling once the pool holds this many words
    pub pool_target: usize,
    /// Stop filtering once this many acceptable targets are found
    pub filtered_limit: usize,
    /// Zipf frequency at or above which a word counts as common vocabulary
    pub common_zipf: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: 4,
            max_length: 6,
            pool_attempts: 60,
            pool_target: 40,
            filtered_limit: 20,
            common_zipf: 4.5,
        }
    }
}

/// Presentation-boundary timing
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long a rejection reason stays visible
    pub error_ttl: Duration,
    /// Upper bound on one submission's validation
    pub submit_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            error_ttl: Duration::from_secs(3),
            submit_timeout: Duration::from_secs(20),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub lexicon: LexiconConfig,
    pub generator: GeneratorConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Defaults overridden by `PIVOT_*` environment variables
    ///
    /// Unparseable values are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("PIVOT_DICTIONARY_URL") {
            config.lexicon.dictionary_url = url;
        }
        if let Some(url) = lookup("PIVOT_DATAMUSE_URL") {
            config.lexicon.datamuse_url = url;
        }
        if let Some(raw) = lookup("PIVOT_HTTP_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) => config.lexicon.timeout = Duration::from_secs(secs),
                Err(e) => tracing::warn!("ignoring PIVOT_HTTP_TIMEOUT_SECS={raw}: {e}"),
            }
        }

        config
    }
}
