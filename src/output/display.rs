//! Display functions for puzzles, games and lookups

use super::formatters::{count_noun, format_chain, move_tag, moves_meter, summary_rows};
use crate::core::{Definition, Puzzle};
use crate::engine::{Game, GameStatus, MAX_MOVES, SubmitOutcome, Validation};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while waiting on a lexical provider
#[must_use]
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Pivot - Word Chains                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Turn the START word into the TARGET word in {MAX_MOVES} moves or fewer.");
    println!("Each move either changes one letter (1 pt) or swaps in a synonym (2 pts).\n");
}

pub fn print_help() {
    println!("Type a word to play it, or a command:");
    println!("  :undo, :u          take back the last move");
    println!("  :retry, :r         restart this puzzle");
    println!("  :new, :n           load a new puzzle");
    println!("  :define <word>     look up a definition");
    println!("  :help              show this help");
    println!("  :quit, :q          leave the game\n");
}

/// Print a puzzle header
pub fn print_puzzle(puzzle: &Puzzle) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "  {}  →  {}",
        puzzle.start().text().to_uppercase().bright_yellow().bold(),
        puzzle.target().text().to_uppercase().bright_green().bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the current chain, move budget and score
pub fn print_game(game: &Game) {
    println!("\n  Chain:  {}", format_chain(game.chain()).bright_white().bold());
    println!(
        "  Moves:  {} {} left",
        moves_meter(game.moves_left(), MAX_MOVES).bright_cyan(),
        count_noun(game.moves_left() as usize, "move")
    );
    println!("  Score:  {}\n", game.score().to_string().bright_yellow());
}

/// Print the result of one submission
pub fn print_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Ignored | SubmitOutcome::Stale => {}
        SubmitOutcome::Busy => println!("{}", "Still checking the last word...".yellow()),
        SubmitOutcome::Rejected(reason) => println!("{} {reason}", "✗".red().bold()),
        SubmitOutcome::Failed(message) => println!("{} {message}", "⚠".yellow().bold()),
        SubmitOutcome::Accepted(accepted) => {
            let gloss = accepted
                .gloss
                .as_deref()
                .map(|g| format!(" ({g})"))
                .unwrap_or_default();
            println!(
                "{} {} {}{} +{}",
                "✓".green().bold(),
                accepted.word.text().to_uppercase().bright_white().bold(),
                move_tag(accepted.kind).bright_black(),
                gloss.bright_black(),
                accepted.points
            );
        }
    }
}

/// Print a definition block
pub fn print_definition(definition: &Definition) {
    let phonetic = if definition.phonetic.is_empty() {
        String::new()
    } else {
        format!("  {}", definition.phonetic.bright_black())
    };
    println!(
        "\n{}{}",
        definition.word.to_uppercase().bright_cyan().bold(),
        phonetic
    );

    for meaning in &definition.meanings {
        println!("  {}", meaning.part_of_speech.italic().yellow());
        for (i, sense) in meaning.senses.iter().enumerate() {
            println!("    {}. {}", i + 1, sense.definition);
            if let Some(example) = &sense.example {
                println!("       {}", format!("\"{example}\"").bright_black());
            }
        }
    }
    println!();
}

/// One-line definition for the puzzle intro
pub fn print_gloss(definition: &Definition) {
    if let Some((part_of_speech, sense)) = definition.primary() {
        println!(
            "  {} {} {}",
            definition.word.to_uppercase().bold(),
            format!("({part_of_speech})").bright_black(),
            sense.definition
        );
    }
}

/// End-of-game summary with score breakdown
pub fn print_summary(game: &Game) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match game.status() {
        GameStatus::Won => println!(
            "{}",
            format!("    Solved in {}!", count_noun(game.moves_used(), "move"))
                .bright_green()
                .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!(
                "    Out of moves. The target was {}.",
                game.puzzle().target().text().to_uppercase()
            )
            .red()
            .bold()
        ),
        GameStatus::Playing => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n  {}", format_chain(game.chain()).bright_white());
    println!();
    for (label, points) in summary_rows(&game.breakdown(), game.score()) {
        println!("  {label:<28} {points:>4}");
    }
    println!(
        "  {} {}",
        format!("{:<28}", "Total").bold(),
        format!("{:>4}", game.score()).bright_yellow().bold()
    );
    println!();
}

/// Verdict for a single checked move
pub fn print_verdict(prev: &str, next: &str, validation: &Validation) {
    match validation {
        Validation::Accepted { kind, gloss, .. } => {
            let gloss = gloss.as_deref().map(|g| format!(" ({g})")).unwrap_or_default();
            println!(
                "{} {} → {}: {}{}",
                "✓".green().bold(),
                prev.to_uppercase(),
                next.to_uppercase(),
                kind,
                gloss
            );
        }
        Validation::Rejected(reason) => {
            println!(
                "{} {} → {}: {reason}",
                "✗".red().bold(),
                prev.to_uppercase(),
                next.to_uppercase()
            );
        }
    }
}

/// Numbered list of generated puzzles
pub fn print_puzzles(puzzles: &[Puzzle]) {
    for (i, puzzle) in puzzles.iter().enumerate() {
        println!(
            "  {}. {} → {}",
            (i + 1).to_string().bright_black(),
            puzzle.start().text().to_uppercase().bright_yellow(),
            puzzle.target().text().to_uppercase().bright_green()
        );
    }
}
