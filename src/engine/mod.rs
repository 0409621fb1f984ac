//! Game engine
//!
//! Move validation, scoring, the game state machine, puzzle generation and
//! the session that ties them together for a front end.

pub mod game;
pub mod generator;
pub mod scoring;
pub mod session;
pub mod validator;

pub use game::{AcceptedMove, Game, GameStatus, SubmitOutcome};
pub use generator::PuzzleGenerator;
pub use scoring::{CLEAR_BONUS, MAX_MOVES, ScoreBreakdown, move_points, unused_moves_bonus};
pub use session::{NETWORK_ERROR, Session};
pub use validator::{Rejection, Validation, validate_move};
