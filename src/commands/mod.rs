//! Command implementations

pub mod check;
pub mod define;
pub mod generate;
pub mod play;

pub use check::check_move;
pub use define::{DefineResult, define_word};
pub use generate::generate_puzzles;
pub use play::{COMMAND_PREFIX, PlayCommand, parse_command, run_play};
