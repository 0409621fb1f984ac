//! Game session shared with a presentation layer
//!
//! A `Session` owns the lexicon, the generator and the current `Game`, and
//! serializes access the way an interactive front end needs:
//! - only one submission is validated at a time (`SubmitOutcome::Busy`)
//! - the most recently started puzzle request is the one that lands
//! - a submission whose game or chain changed mid-flight is dropped (`Stale`)
//! - rejection reasons are kept as a transient error with a TTL
//!
//! The state lock is never held across an `.await`.

use super::game::{Game, SubmitOutcome};
use super::generator::PuzzleGenerator;
use super::validator::validate_move;
use crate::config::SessionConfig;
use crate::core::{Definition, Puzzle};
use crate::lexicon::Lexicon;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, warn};

/// Message shown when a submission could not be validated
pub const NETWORK_ERROR: &str = "Network error, please try again";

#[derive(Debug, Clone)]
struct Notice {
    message: String,
    expires_at: Instant,
}

#[derive(Default)]
struct SessionState {
    game: Option<Game>,
    /// Ticket of the request that installed `game`
    epoch: u64,
    error: Option<Notice>,
}

/// Clears the busy flag when a submission finishes, however it finishes
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct Session {
    lexicon: Arc<Lexicon>,
    generator: PuzzleGenerator,
    config: SessionConfig,
    state: Mutex<SessionState>,
    /// Last ticket handed out; a request may only install with the latest
    tickets: AtomicU64,
    busy: AtomicBool,
}

impl Session {
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>, generator: PuzzleGenerator, config: SessionConfig) -> Self {
        Self {
            lexicon,
            generator,
            config,
            state: Mutex::new(SessionState::default()),
            tickets: AtomicU64::new(0),
            busy: AtomicBool::new(false),
        }
    }

    fn next_ticket(&self) -> u64 {
        self.tickets.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Copy of the current game, if a puzzle is loaded
    #[must_use]
    pub fn snapshot(&self) -> Option<Game> {
        self.state.lock().game.clone()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Generate and install a random puzzle
    ///
    /// Returns `None` when a later request superseded this one; its puzzle is
    /// discarded.
    pub async fn new_puzzle(&self) -> Option<Puzzle> {
        let ticket = self.next_ticket();
        let puzzle = self.generator.generate().await;

        if self.install(ticket, Game::new(puzzle.clone())) {
            Some(puzzle)
        } else {
            debug!(%puzzle, ticket, "discarding superseded puzzle");
            None
        }
    }

    /// Install a specific puzzle immediately
    pub fn start(&self, puzzle: Puzzle) {
        let ticket = self.next_ticket();
        self.install(ticket, Game::new(puzzle));
    }

    fn install(&self, ticket: u64, game: Game) -> bool {
        let mut state = self.state.lock();
        if self.tickets.load(Ordering::SeqCst) != ticket {
            return false;
        }
        *state = SessionState {
            game: Some(game),
            epoch: ticket,
            error: None,
        };
        true
    }

    /// Restart the current puzzle from its start word
    pub fn retry(&self) -> bool {
        let mut state = self.state.lock();
        let Some(game) = state.game.as_mut() else {
            return false;
        };
        game.reset();
        state.epoch = self.next_ticket();
        state.error = None;
        true
    }

    /// After a loss replay the same puzzle, otherwise load a new one
    pub async fn play_again(&self) -> Option<Puzzle> {
        let lost = {
            let state = self.state.lock();
            state
                .game
                .as_ref()
                .is_some_and(|game| game.is_over() && !game.won())
        };

        if lost && self.retry() {
            return self.snapshot().map(|game| game.puzzle().clone());
        }
        self.new_puzzle().await
    }

    /// Validate `input` and apply it to the current game
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        if input.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            return SubmitOutcome::Busy;
        };

        let (epoch, current, chain, target) = {
            let state = self.state.lock();
            let Some(game) = state.game.as_ref() else {
                return SubmitOutcome::Ignored;
            };
            if game.is_over() {
                return SubmitOutcome::Ignored;
            }
            (
                state.epoch,
                game.current_word().clone(),
                game.chain().to_vec(),
                game.puzzle().target().clone(),
            )
        };

        let validation = tokio::time::timeout(
            self.config.submit_timeout,
            validate_move(&self.lexicon, current.text(), input, &chain, &target),
        )
        .await;
        let Ok(validation) = validation else {
            warn!(%current, input, "move validation timed out");
            self.set_error(NETWORK_ERROR);
            return SubmitOutcome::Failed(NETWORK_ERROR.to_string());
        };

        let mut state = self.state.lock();
        if state.epoch != epoch {
            return SubmitOutcome::Stale;
        }
        let Some(game) = state.game.as_mut() else {
            return SubmitOutcome::Stale;
        };
        // The move was validated against `chain`; it only applies to that chain
        if game.chain() != chain.as_slice() {
            debug!(input, "chain changed during validation, dropping move");
            return SubmitOutcome::Stale;
        }

        let outcome = game.apply(validation);
        match &outcome {
            SubmitOutcome::Rejected(reason) => {
                state.error = Some(self.notice(reason.to_string()));
            }
            SubmitOutcome::Accepted(_) => state.error = None,
            _ => {}
        }
        outcome
    }

    /// Take back the last move; refused while a submission is in flight
    pub fn undo(&self) -> bool {
        // Checked under the lock so no submission can snapshot the chain
        // between the check and the pop
        let mut state = self.state.lock();
        if self.is_busy() {
            return false;
        }
        state.game.as_mut().is_some_and(Game::undo)
    }

    /// Current transient error, if it has not expired
    #[must_use]
    pub fn error(&self) -> Option<String> {
        let state = self.state.lock();
        state
            .error
            .as_ref()
            .filter(|notice| Instant::now() < notice.expires_at)
            .map(|notice| notice.message.clone())
    }

    pub fn clear_error(&self) {
        self.state.lock().error = None;
    }

    fn notice(&self, message: String) -> Notice {
        Notice {
            message,
            expires_at: Instant::now() + self.config.error_ttl,
        }
    }

    fn set_error(&self, message: &str) {
        let notice = self.notice(message.to_string());
        self.state.lock().error = Some(notice);
    }

    /// Definition for display
    pub async fn definition(&self, word: &str) -> Arc<Definition> {
        self.lexicon.definition(word).await
    }
}
