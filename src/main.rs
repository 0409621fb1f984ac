//! Pivot - CLI
//!
//! Word-chain puzzle: change one letter or swap in a synonym to walk from
//! START to TARGET in five moves.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use pivot_words::{
    commands::{check_move, define_word, generate_puzzles, run_play},
    config::Config,
    core::{Puzzle, Word},
    engine::{PuzzleGenerator, Session},
    lexicon::{HttpLexicon, Lexicon},
    output::{print_definition, print_puzzles, print_verdict, spinner},
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pivot",
    about = "Word-chain puzzles: letter changes and synonym swaps",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log lexicon lookups and generator decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the dictionary API
    #[arg(long, global = true)]
    dictionary_url: Option<String>,

    /// Base URL of the Datamuse API
    #[arg(long, global = true)]
    datamuse_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Custom start word (requires --target)
        #[arg(long, requires = "target")]
        start: Option<String>,

        /// Custom target word (requires --start)
        #[arg(long, requires = "start")]
        target: Option<String>,
    },

    /// Print random puzzles
    Generate {
        /// Number of puzzles
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Look up a word's definition
    Define {
        /// Word to define
        word: String,
    },

    /// Check whether one move would be accepted
    Check {
        /// Current word
        prev: String,

        /// Word to move to
        next: String,
    },
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins; otherwise `warn`, or `debug` for this crate when verbose.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,pivot_words=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(cli: &Cli) -> Config {
    let mut config = Config::from_env();
    if let Some(url) = &cli.dictionary_url {
        config.lexicon.dictionary_url.clone_from(url);
    }
    if let Some(url) = &cli.datamuse_url {
        config.lexicon.datamuse_url.clone_from(url);
    }
    config
}

fn custom_puzzle(start: &str, target: &str) -> Result<Puzzle> {
    let start = Word::new(start).map_err(|e| anyhow!("Invalid start word: {e}"))?;
    let target = Word::new(target).map_err(|e| anyhow!("Invalid target word: {e}"))?;
    Puzzle::new(start, target).map_err(|e| anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli);
    let source = HttpLexicon::new(config.lexicon.clone()).context("building HTTP client")?;
    let lexicon = Arc::new(Lexicon::new(Arc::new(source)));

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        start: None,
        target: None,
    });

    match command {
        Commands::Play { start, target } => {
            let custom = match (start, target) {
                (Some(start), Some(target)) => Some(custom_puzzle(&start, &target)?),
                _ => None,
            };
            let generator = PuzzleGenerator::new(lexicon.clone(), config.generator);
            let session = Session::new(lexicon, generator, config.session);
            run_play(&session, custom).await
        }
        Commands::Generate { count } => {
            let generator = PuzzleGenerator::new(lexicon, config.generator);
            let pb = spinner("Generating puzzles...");
            let puzzles = generate_puzzles(&generator, count).await;
            pb.finish_and_clear();
            print_puzzles(&puzzles);
            Ok(())
        }
        Commands::Define { word } => {
            let pb = spinner("Looking up...");
            let result = define_word(&lexicon, &word).await.map_err(|e| anyhow!(e));
            pb.finish_and_clear();
            let result = result?;
            if !result.known {
                println!("\"{}\" does not seem to be a valid English word", result.word);
            }
            print_definition(&result.definition);
            Ok(())
        }
        Commands::Check { prev, next } => {
            let pb = spinner("Checking...");
            let validation = check_move(&lexicon, &prev, &next).await.map_err(|e| anyhow!(e));
            pb.finish_and_clear();
            print_verdict(&prev, &next, &validation?);
            Ok(())
        }
    }
}
