//! Terminal output formatting
//!
//! Display utilities for the game loop and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_definition, print_game, print_gloss, print_help, print_outcome,
    print_puzzle, print_puzzles, print_summary, print_verdict, spinner,
};
