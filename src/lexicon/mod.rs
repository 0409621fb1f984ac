//! Lexical gateway
//!
//! Word validity, definitions and synonyms, memoized per normalized word.
//! External providers sit behind the `LexicalSource` trait.

mod cache;
mod gateway;
mod http;
mod memory;
mod source;

pub use cache::MemoCache;
pub use gateway::{
    Lexicon, SYNONYMS_ON_PROVIDER_FAILURE, SynonymSet, VALIDITY_ON_PROVIDER_FAILURE,
};
pub use http::HttpLexicon;
pub use memory::MemoryLexicon;
pub use source::{LexicalSource, RankedWord, Relation};
