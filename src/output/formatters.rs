//! Formatting utilities for terminal output

use crate::core::{MoveKind, Word};
use crate::engine::ScoreBreakdown;

/// Chain as `start → next → ...`, uppercased
#[must_use]
pub fn format_chain(chain: &[Word]) -> String {
    chain
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Short tag shown beside an accepted move
#[must_use]
pub const fn move_tag(kind: MoveKind) -> &'static str {
    match kind {
        MoveKind::LetterChange => "[letter]",
        MoveKind::SynonymSwap => "[synonym]",
    }
}

/// Remaining moves as a filled/empty meter
#[must_use]
pub fn moves_meter(moves_left: u32, max_moves: u32) -> String {
    let left = moves_left.min(max_moves) as usize;
    let used = max_moves as usize - left;
    format!("{}{}", "●".repeat(left), "○".repeat(used))
}

/// `1 move`, `3 moves`
#[must_use]
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Labelled rows of the end-of-game score summary
///
/// Undo keeps a move's points, so `score` can exceed the breakdown of the
/// surviving moves; the difference gets its own row and the rows always add
/// up to `score`.
#[must_use]
pub fn summary_rows(breakdown: &ScoreBreakdown, score: u32) -> Vec<(String, u32)> {
    let mut rows = vec![
        (
            format!("Letter changes ({})", breakdown.letter_changes),
            u32::try_from(breakdown.letter_changes).unwrap_or(u32::MAX),
        ),
        (
            format!("Synonym swaps ({} × 2)", breakdown.synonym_swaps),
            u32::try_from(breakdown.synonym_swaps * 2).unwrap_or(u32::MAX),
        ),
    ];

    let undone = score.saturating_sub(breakdown.total());
    if undone > 0 {
        rows.push(("Undone moves (kept)".to_string(), undone));
    }

    rows.push(("Unused moves bonus".to_string(), breakdown.unused_bonus));
    rows.push(("Clear bonus".to_string(), breakdown.clear_bonus));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn chain_joined_with_arrows() {
        assert_eq!(
            format_chain(&words(&["cold", "gold", "gilded"])),
            "COLD → GOLD → GILDED"
        );
        assert_eq!(format_chain(&words(&["cold"])), "COLD");
    }

    #[test]
    fn meter_full_and_empty() {
        assert_eq!(moves_meter(5, 5), "●●●●●");
        assert_eq!(moves_meter(0, 5), "○○○○○");
        assert_eq!(moves_meter(3, 5), "●●●○○");
    }

    #[test]
    fn meter_clamps_overflow() {
        assert_eq!(moves_meter(9, 5), "●●●●●");
    }

    #[test]
    fn count_noun_pluralizes() {
        assert_eq!(count_noun(1, "move"), "1 move");
        assert_eq!(count_noun(0, "move"), "0 moves");
        assert_eq!(count_noun(4, "move"), "4 moves");
    }

    #[test]
    fn summary_rows_match_breakdown() {
        let moves = [MoveKind::LetterChange, MoveKind::SynonymSwap];
        let breakdown = ScoreBreakdown::new(&moves, 3, true);
        let rows = summary_rows(&breakdown, breakdown.total());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], ("Letter changes (1)".to_string(), 1));
        assert_eq!(rows[1], ("Synonym swaps (1 × 2)".to_string(), 2));
        assert_eq!(rows[2], ("Unused moves bonus".to_string(), 16));
        assert_eq!(rows[3], ("Clear bonus".to_string(), 5));
        let sum: u32 = rows.iter().map(|(_, points)| points).sum();
        assert_eq!(sum, breakdown.total());
    }

    #[test]
    fn summary_rows_account_for_undone_moves() {
        // Two letter changes played, one undone, then a synonym swap wins
        let moves = [MoveKind::LetterChange, MoveKind::SynonymSwap];
        let breakdown = ScoreBreakdown::new(&moves, 3, true);
        let score = 1 + 1 + 2 + breakdown.unused_bonus + breakdown.clear_bonus;

        let rows = summary_rows(&breakdown, score);
        assert_eq!(rows[2], ("Undone moves (kept)".to_string(), 1));
        let sum: u32 = rows.iter().map(|(_, points)| points).sum();
        assert_eq!(sum, score);
    }
}
