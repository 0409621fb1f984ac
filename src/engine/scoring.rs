//! Scoring rules

use crate::core::MoveKind;

/// Move budget per puzzle
pub const MAX_MOVES: u32 = 5;

/// Flat bonus for reaching the target
pub const CLEAR_BONUS: u32 = 5;

/// Base points for one accepted move
#[must_use]
pub const fn move_points(kind: MoveKind) -> u32 {
    match kind {
        MoveKind::LetterChange => 1,
        MoveKind::SynonymSwap => 2,
    }
}

/// Reward for finishing early: `(moves_left + 1)²`
///
/// 0 left → 1, 1 → 4, 2 → 9, 3 → 16, 4 → 25, 5 → 36.
#[must_use]
pub const fn unused_moves_bonus(moves_left: u32) -> u32 {
    (moves_left + 1) * (moves_left + 1)
}

/// Breakdown of a finished game's score, for the summary screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub letter_changes: usize,
    pub synonym_swaps: usize,
    /// Sum of per-move base points
    pub base: u32,
    /// Unused-moves bonus (0 unless won)
    pub unused_bonus: u32,
    /// Clear bonus (0 unless won)
    pub clear_bonus: u32,
}

impl ScoreBreakdown {
    /// Compute the breakdown for a sequence of moves
    #[must_use]
    pub fn new(moves: &[MoveKind], moves_left: u32, won: bool) -> Self {
        let letter_changes = moves
            .iter()
            .filter(|&&kind| kind == MoveKind::LetterChange)
            .count();
        let synonym_swaps = moves.len() - letter_changes;
        let base = moves.iter().map(|&kind| move_points(kind)).sum();
        let (unused_bonus, clear_bonus) = if won {
            (unused_moves_bonus(moves_left), CLEAR_BONUS)
        } else {
            (0, 0)
        };

        Self {
            letter_changes,
            synonym_swaps,
            base,
            unused_bonus,
            clear_bonus,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.base + self.unused_bonus + self.clear_bonus
    }
}
