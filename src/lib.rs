//! Pivot
//!
//! A word-chain puzzle: turn START into TARGET in at most five moves, where
//! each move either changes one letter or swaps in a synonym.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pivot_words::core::{Puzzle, Word};
//! use pivot_words::engine::Game;
//!
//! let puzzle = Puzzle::new(Word::new("cold").unwrap(), Word::new("gilded").unwrap()).unwrap();
//! let game = Game::new(puzzle);
//! println!("{} moves left", game.moves_left());
//! ```

// Core domain types
pub mod core;

// Lexical providers and caching gateway
pub mod lexicon;

// Validation, scoring, game state and generation
pub mod engine;

// Runtime configuration
pub mod config;

// Provider errors
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
