//! Chain and score state machine
//!
//! A `Game` starts `Playing` with the start word as the only chain element.
//! Accepted moves append to the chain and spend one move; reaching the target
//! wins, spending the last move without reaching it loses. Both terminal
//! states hold until `reset`.

use super::scoring::{CLEAR_BONUS, MAX_MOVES, ScoreBreakdown, move_points, unused_moves_bonus};
use super::validator::{Rejection, Validation, validate_move};
use crate::core::{MoveKind, Puzzle, Word};
use crate::lexicon::Lexicon;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A move the game accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedMove {
    pub word: Word,
    pub kind: MoveKind,
    pub gloss: Option<String>,
    /// Base points this move earned
    pub points: u32,
    /// Status after the move
    pub status: GameStatus,
}

/// Result of submitting a candidate word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or finished game; nothing happened
    Ignored,
    /// Another submission is still being validated
    Busy,
    Rejected(Rejection),
    Accepted(AcceptedMove),
    /// Validation could not complete; nothing was applied
    Failed(String),
    /// The game was replaced while this submission was in flight
    Stale,
}

/// In-progress game for one puzzle
#[derive(Debug, Clone)]
pub struct Game {
    puzzle: Puzzle,
    chain: Vec<Word>,
    moves: Vec<MoveKind>,
    moves_left: u32,
    score: u32,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let chain = vec![puzzle.start().clone()];
        Self {
            puzzle,
            chain,
            moves: Vec::new(),
            moves_left: MAX_MOVES,
            score: 0,
            status: GameStatus::Playing,
        }
    }

    /// Restart the same puzzle
    pub fn reset(&mut self) {
        *self = Self::new(self.puzzle.clone());
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn chain(&self) -> &[Word] {
        &self.chain
    }

    /// `moves()[i]` describes `chain()[i] → chain()[i + 1]`
    #[must_use]
    pub fn moves(&self) -> &[MoveKind] {
        &self.moves
    }

    #[must_use]
    pub const fn moves_left(&self) -> u32 {
        self.moves_left
    }

    #[must_use]
    pub fn moves_used(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Word the next move starts from
    #[must_use]
    pub fn current_word(&self) -> &Word {
        self.chain.last().unwrap_or_else(|| self.puzzle.start())
    }

    /// Score breakdown for the summary screen
    #[must_use]
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown::new(&self.moves, self.moves_left, self.won())
    }

    /// Validate `input` against the current chain and apply it if accepted
    ///
    /// Taking `&mut self` across the validation rules out overlapping
    /// submissions against the same game.
    pub async fn submit(&mut self, lexicon: &Lexicon, input: &str) -> SubmitOutcome {
        if self.is_over() || input.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let validation = validate_move(
            lexicon,
            self.current_word().text(),
            input,
            &self.chain,
            self.puzzle.target(),
        )
        .await;
        self.apply(validation)
    }

    /// Apply a validation result computed against the current chain
    pub fn apply(&mut self, validation: Validation) -> SubmitOutcome {
        if self.is_over() {
            return SubmitOutcome::Ignored;
        }

        let (word, kind, gloss) = match validation {
            Validation::Rejected(reason) => return SubmitOutcome::Rejected(reason),
            Validation::Accepted { word, kind, gloss } => (word, kind, gloss),
        };

        let points = move_points(kind);
        self.chain.push(word.clone());
        self.moves.push(kind);
        self.moves_left = self.moves_left.saturating_sub(1);
        self.score += points;

        if word == *self.puzzle.target() {
            self.status = GameStatus::Won;
            self.score += unused_moves_bonus(self.moves_left) + CLEAR_BONUS;
            info!(puzzle = %self.puzzle, score = self.score, "puzzle solved");
        } else if self.moves_left == 0 {
            self.status = GameStatus::Lost;
            info!(puzzle = %self.puzzle, score = self.score, "out of moves");
        }

        SubmitOutcome::Accepted(AcceptedMove {
            word,
            kind,
            gloss,
            points,
            status: self.status,
        })
    }

    /// Take back the last move
    ///
    /// Restores the chain and the move budget; the score is kept. Returns
    /// false (and changes nothing) at the start of the chain or once the game
    /// is over.
    pub fn undo(&mut self) -> bool {
        if self.chain.len() <= 1 || self.is_over() {
            return false;
        }

        self.chain.pop();
        self.moves.pop();
        self.moves_left += 1;
        true
    }
}
