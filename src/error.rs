//! Lexical provider errors
//!
//! These never reach the player: the `Lexicon` gateway turns them into
//! fallback values. They exist so providers and their tests can say what
//! went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, LexiconError>;
