//! Interactive play loop
//!
//! Line-based game over stdin: each line is a word to play or a command.

use crate::core::Puzzle;
use crate::engine::{Session, SubmitOutcome};
use crate::output::{
    print_banner, print_definition, print_game, print_gloss, print_help, print_outcome,
    print_puzzle, print_summary, spinner,
};
use anyhow::Result;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Empty,
    Play(String),
    Undo,
    Retry,
    New,
    Define(String),
    Help,
    Quit,
}

/// Prefix that marks a line as a command rather than a move
pub const COMMAND_PREFIX: char = ':';

/// Interpret a line of input
///
/// Commands live behind `:` so every word, `help` and `quit` included,
/// can still be played.
#[must_use]
pub fn parse_command(line: &str) -> PlayCommand {
    let line = line.trim();
    let Some(command) = line.strip_prefix(COMMAND_PREFIX) else {
        return if line.is_empty() {
            PlayCommand::Empty
        } else {
            PlayCommand::Play(line.to_string())
        };
    };

    let command = command.trim().to_lowercase();
    let (name, argument) = command
        .split_once(char::is_whitespace)
        .map_or((command.as_str(), ""), |(name, rest)| (name, rest.trim()));

    match (name, argument) {
        ("undo" | "u", _) => PlayCommand::Undo,
        ("retry" | "r", _) => PlayCommand::Retry,
        ("new" | "n", _) => PlayCommand::New,
        ("quit" | "q" | "exit", _) => PlayCommand::Quit,
        ("define" | "d", word) if !word.is_empty() => PlayCommand::Define(word.to_string()),
        _ => PlayCommand::Help,
    }
}

/// Run the interactive game until the player quits or input ends
///
/// Starts with `custom` if given, otherwise with a generated puzzle.
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub async fn run_play(session: &Session, custom: Option<Puzzle>) -> Result<()> {
    print_banner();
    print_help();

    if let Some(puzzle) = custom {
        session.start(puzzle);
    } else {
        load_new_puzzle(session).await;
    }
    show_intro(session).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt("Your move")?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            PlayCommand::Empty => {}
            PlayCommand::Quit => break,
            PlayCommand::Help => print_help(),
            PlayCommand::Undo => {
                if session.undo() {
                    println!("✓ Undone!");
                    show_game(session);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            PlayCommand::Retry => {
                if session.retry() {
                    println!("\n🔄 Puzzle restarted!\n");
                    show_intro(session).await;
                }
            }
            PlayCommand::New => {
                load_new_puzzle(session).await;
                show_intro(session).await;
            }
            PlayCommand::Define(word) => {
                let pb = spinner(&format!("Looking up {word}..."));
                let definition = session.definition(&word).await;
                pb.finish_and_clear();
                print_definition(&definition);
            }
            PlayCommand::Play(word) => {
                let pb = spinner("Checking...");
                let outcome = session.submit(&word).await;
                pb.finish_and_clear();
                print_outcome(&outcome);

                if let SubmitOutcome::Accepted(accepted) = &outcome {
                    let definition = session.definition(accepted.word.text()).await;
                    print_gloss(&definition);
                }

                let Some(game) = session.snapshot() else {
                    continue;
                };
                if !game.is_over() {
                    print_game(&game);
                    continue;
                }

                print_summary(&game);
                prompt("Play again? (yes/no)")?;
                let answer = lines.next_line().await?.unwrap_or_default();
                if !matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
                    break;
                }

                let pb = spinner("Preparing puzzle...");
                session.play_again().await;
                pb.finish_and_clear();
                show_intro(session).await;
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

async fn load_new_puzzle(session: &Session) {
    let pb = spinner("Generating puzzle...");
    session.new_puzzle().await;
    pb.finish_and_clear();
}

/// Puzzle header with short definitions of both ends
async fn show_intro(session: &Session) {
    let Some(game) = session.snapshot() else {
        return;
    };
    let puzzle = game.puzzle();

    print_puzzle(puzzle);
    let (start, target) = tokio::join!(
        session.definition(puzzle.start().text()),
        session.definition(puzzle.target().text())
    );
    print_gloss(&start);
    print_gloss(&target);
    print_game(&game);
}

fn show_game(session: &Session) {
    if let Some(game) = session.snapshot() {
        print_game(&game);
    }
}

fn prompt(label: &str) -> io::Result<()> {
    print!("{label}: ");
    io::stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_and_aliases() {
        assert_eq!(parse_command(":undo"), PlayCommand::Undo);
        assert_eq!(parse_command(" :U "), PlayCommand::Undo);
        assert_eq!(parse_command(":r"), PlayCommand::Retry);
        assert_eq!(parse_command(":NEW"), PlayCommand::New);
        assert_eq!(parse_command(":q"), PlayCommand::Quit);
        assert_eq!(parse_command(":help"), PlayCommand::Help);
    }

    #[test]
    fn command_words_are_playable() {
        for word in ["help", "quit", "exit", "new", "undo", "retry", "define"] {
            assert_eq!(parse_command(word), PlayCommand::Play(word.to_string()));
        }
        assert_eq!(parse_command(" Quit "), PlayCommand::Play("Quit".to_string()));
    }

    #[test]
    fn blank_line_is_empty() {
        assert_eq!(parse_command(""), PlayCommand::Empty);
        assert_eq!(parse_command("   \t"), PlayCommand::Empty);
    }

    #[test]
    fn define_takes_a_word() {
        assert_eq!(
            parse_command(":define Gilded"),
            PlayCommand::Define("gilded".to_string())
        );
        assert_eq!(parse_command(":d  cold "), PlayCommand::Define("cold".to_string()));
        assert_eq!(parse_command(":define"), PlayCommand::Help);
    }

    #[test]
    fn unknown_command_shows_help() {
        assert_eq!(parse_command(":"), PlayCommand::Help);
        assert_eq!(parse_command(":dance"), PlayCommand::Help);
    }

    #[test]
    fn other_input_is_a_move() {
        assert_eq!(parse_command(" Gold "), PlayCommand::Play("Gold".to_string()));
        assert_eq!(
            parse_command("ice cream"),
            PlayCommand::Play("ice cream".to_string())
        );
    }
}
