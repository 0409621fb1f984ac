//! Puzzle generation command

use crate::core::Puzzle;
use crate::engine::PuzzleGenerator;

/// Generate `count` puzzles one after another
pub async fn generate_puzzles(generator: &PuzzleGenerator, count: usize) -> Vec<Puzzle> {
    let mut puzzles = Vec::with_capacity(count);
    for _ in 0..count {
        puzzles.push(generator.generate().await);
    }
    puzzles
}
