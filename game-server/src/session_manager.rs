use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Result;
use dashmap::DashMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use uuid::Uuid;

use game_core::{Dictionary, GameSession, GuessOutcome, win_message};
use game_types::{
    GameStatus, GuessResponse, NewGameResponse, Outcome, SessionError, SessionId, Word,
};

struct SessionEntry {
    session: GameSession,
    owner: Option<Uuid>,
    last_activity: Instant,
}

/// Result of a guess submission, plus the outcome the hosting layer
/// must record when this submission finished the session. The outcome
/// is emitted exactly once, on the Active-to-terminal edge.
pub struct GuessReply {
    pub response: GuessResponse,
    pub owner: Option<Uuid>,
    pub terminal_outcome: Option<Outcome>,
}

/// Server-side session store. Each entry is accessed exclusively
/// during a submission, so the guess append and the status transition
/// are atomic per session; different sessions proceed in parallel.
pub struct SessionManager {
    sessions: DashMap<SessionId, SessionEntry>,
    dictionary: Arc<Dictionary>,
    rng: Mutex<StdRng>,
    max_guesses: u32,
}

impl SessionManager {
    pub fn new(dictionary: Arc<Dictionary>, max_guesses: u32) -> Self {
        Self::with_rng(dictionary, max_guesses, StdRng::from_os_rng())
    }

    /// Fixed-seed manager, for deterministic target draws in tests.
    pub fn with_seed(dictionary: Arc<Dictionary>, max_guesses: u32, seed: u64) -> Self {
        Self::with_rng(dictionary, max_guesses, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dictionary: Arc<Dictionary>, max_guesses: u32, rng: StdRng) -> Self {
        Self {
            sessions: DashMap::new(),
            dictionary,
            rng: Mutex::new(rng),
            max_guesses,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Start a new session with a randomly drawn target.
    pub fn create_session(&self, owner: Option<Uuid>) -> Result<NewGameResponse> {
        let target = {
            let mut rng = self.rng.lock().expect("rng lock poisoned");
            self.dictionary.draw(&mut *rng)?
        };
        Ok(self.insert_session(target, owner))
    }

    /// Start a session with a fixed target. Intended for tests and
    /// debugging; production draws go through `create_session`.
    ///
    /// Panics if the target's length differs from the dictionary's
    /// word length; guess scoring relies on the two agreeing.
    pub fn create_session_with_target(&self, target: Word, owner: Option<Uuid>) -> NewGameResponse {
        assert_eq!(
            target.len(),
            self.dictionary.word_length(),
            "target {:?} does not match the dictionary word length {}",
            target,
            self.dictionary.word_length()
        );
        self.insert_session(target, owner)
    }

    fn insert_session(&self, target: Word, owner: Option<Uuid>) -> NewGameResponse {
        let session = GameSession::new(target, self.max_guesses);
        let response = NewGameResponse {
            session_id: session.id(),
            word_length: session.word_length() as u32,
            max_guesses: self.max_guesses,
        };

        info!("Created session {} (owner: {:?})", session.id(), owner);

        self.sessions.insert(
            session.id(),
            SessionEntry {
                session,
                owner,
                last_activity: Instant::now(),
            },
        );
        response
    }

    /// Run one guess through validation, scoring, and the session
    /// transition. Unknown and finished sessions are protocol errors.
    pub fn submit_guess(
        &self,
        session_id: SessionId,
        raw: &str,
    ) -> Result<GuessReply, SessionError> {
        let mut entry = self
            .sessions
            .get_mut(&session_id)
            .ok_or(SessionError::NotFound { session_id })?;
        entry.last_activity = Instant::now();

        let owner = entry.owner;
        let outcome = entry.session.submit_guess(raw, &self.dictionary)?;

        match outcome {
            GuessOutcome::Rejected(err) => Ok(GuessReply {
                response: GuessResponse::rejected(err.to_string()),
                owner,
                terminal_outcome: None,
            }),
            GuessOutcome::Accepted {
                record,
                status,
                target,
            } => {
                let win_msg = (status == GameStatus::Won)
                    .then(|| win_message(record.guess_number).to_string());
                let terminal_outcome = match status {
                    GameStatus::Won => Some(Outcome::Win),
                    GameStatus::Lost => Some(Outcome::Lose),
                    GameStatus::Active => None,
                };

                Ok(GuessReply {
                    response: GuessResponse::accepted(
                        &record,
                        status,
                        target.map(|word| word.to_string()),
                        win_msg,
                    ),
                    owner,
                    terminal_outcome,
                })
            }
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Drop sessions idle for longer than the TTL. Terminal sessions
    /// also linger until the TTL so that late guesses report the
    /// finished-session error instead of "not found".
    pub fn cleanup_expired_sessions(&self, ttl: Duration) -> usize {
        // Counted inside the closure: sessions created while the sweep
        // is in flight would skew a before/after length comparison.
        let mut removed = 0;
        self.sessions.retain(|_, entry| {
            let keep = entry.last_activity.elapsed() <= ttl;
            if !keep {
                removed += 1;
            }
            keep
        });

        if removed > 0 {
            info!("Cleaned up {} expired sessions", removed);
        }
        removed
    }
}
