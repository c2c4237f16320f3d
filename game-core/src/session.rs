use tracing::debug;
use uuid::Uuid;

use crate::{Dictionary, ScoringEngine};
use game_types::{GameStatus, GuessRecord, SessionError, SessionId, ValidationError, Word};

pub const DEFAULT_MAX_GUESSES: u32 = 8;

/// Celebratory message for a win on the given guess number (1-based),
/// clamped to the table range. Presentational only.
pub fn win_message(guess_number: u32) -> &'static str {
    const MESSAGES: [&str; 8] = [
        "You are one of a kind!",
        "Two-good!",
        "Threemendous!",
        "Fourtastic!",
        "High five!",
        "Sixessful!",
        "Seven in the glory!",
        "A hardword indeed.",
    ];
    MESSAGES[(guess_number.clamp(1, MESSAGES.len() as u32) - 1) as usize]
}

/// What a session reports for one submitted guess.
#[derive(Debug, Clone)]
pub enum GuessOutcome {
    /// Guess failed validation; no turn was consumed.
    Rejected(ValidationError),
    /// Guess was scored and recorded.
    Accepted {
        record: GuessRecord,
        status: GameStatus,
        /// Target word, revealed only once the session is terminal.
        target: Option<Word>,
    },
}

/// One play-through: a hidden target, the guess history, and the
/// status. Transitions only `Active -> Won` or `Active -> Lost`; once
/// terminal the session is immutable and further submissions are a
/// protocol error.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    target: Word, // hidden from clients until terminal
    history: Vec<GuessRecord>,
    max_guesses: u32,
    status: GameStatus,
}

impl GameSession {
    pub fn new(target: Word, max_guesses: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            target,
            history: Vec::new(),
            max_guesses,
            status: GameStatus::Active,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The target word, exposed only once the session is finished.
    pub fn revealed_target(&self) -> Option<&Word> {
        self.is_terminal().then_some(&self.target)
    }

    /// Validate, score, and record one guess.
    ///
    /// Rejections leave history and status untouched. An accepted
    /// guess appends its record and then applies the transition rule:
    /// all letters in place wins, an exhausted guess budget loses.
    pub fn submit_guess(
        &mut self,
        raw: &str,
        dictionary: &Dictionary,
    ) -> Result<GuessOutcome, SessionError> {
        if self.is_terminal() {
            return Err(SessionError::Completed {
                session_id: self.id,
            });
        }

        let word = match dictionary.validate_guess(raw) {
            Ok(word) => word,
            Err(err) => return Ok(GuessOutcome::Rejected(err)),
        };

        // Resubmitting an earlier guess does not consume a turn either
        if self.history.iter().any(|record| record.word == word) {
            return Ok(GuessOutcome::Rejected(ValidationError::AlreadyGuessed {
                word: word.to_string(),
            }));
        }

        // Lengths always agree: target and guess both come from the
        // same dictionary.
        let score = ScoringEngine::evaluate(&word, &self.target)
            .expect("validated guess length matches target length");

        let record = GuessRecord {
            word,
            score,
            guess_number: self.history.len() as u32 + 1,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        self.history.push(record.clone());

        if score.is_win(self.target.len()) {
            self.status = GameStatus::Won;
        } else if self.history.len() as u32 >= self.max_guesses {
            self.status = GameStatus::Lost;
        }

        if self.is_terminal() {
            debug!(
                "Session {} finished as {:?} after {} guesses",
                self.id,
                self.status,
                self.history.len()
            );
        }

        Ok(GuessOutcome::Accepted {
            record,
            status: self.status,
            target: self.revealed_target().cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::Score;

    fn test_dictionary() -> Dictionary {
        Dictionary::from_word_list("code\ndove\nrain\nmist\nglow\nfern\nharp\nlock\nwasp", 4)
    }

    fn session_with_target(target: &str) -> GameSession {
        GameSession::new(Word::new(target), DEFAULT_MAX_GUESSES)
    }

    #[test]
    fn test_new_session_is_active_and_empty() {
        let session = session_with_target("code");
        assert_eq!(session.status(), GameStatus::Active);
        assert!(session.history().is_empty());
        assert_eq!(session.revealed_target(), None);
    }

    #[test]
    fn test_rejected_guess_consumes_no_turn() {
        let dictionary = test_dictionary();
        let mut session = session_with_target("code");

        let outcome = session.submit_guess("zzzz", &dictionary).unwrap();
        assert!(matches!(
            outcome,
            GuessOutcome::Rejected(ValidationError::RepeatingLetter { .. })
        ));
        assert!(session.history().is_empty());
        assert_eq!(session.status(), GameStatus::Active);

        let outcome = session.submit_guess("qqq", &dictionary).unwrap();
        assert!(matches!(
            outcome,
            GuessOutcome::Rejected(ValidationError::InvalidLength { .. })
        ));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_accepted_guess_appends_exactly_one_record() {
        let dictionary = test_dictionary();
        let mut session = session_with_target("code");

        let outcome = session.submit_guess("dove", &dictionary).unwrap();
        match outcome {
            GuessOutcome::Accepted {
                record,
                status,
                target,
            } => {
                assert_eq!(
                    record.score,
                    Score {
                        correct_position: 2,
                        correct_letter: 1
                    }
                );
                assert_eq!(record.guess_number, 1);
                assert_eq!(status, GameStatus::Active);
                assert_eq!(target, None);
            }
            other => panic!("Expected accepted guess, got {:?}", other),
        }
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_duplicate_guess_rejected_without_turn() {
        let dictionary = test_dictionary();
        let mut session = session_with_target("code");

        session.submit_guess("dove", &dictionary).unwrap();
        let outcome = session.submit_guess("DOVE", &dictionary).unwrap();

        assert!(matches!(
            outcome,
            GuessOutcome::Rejected(ValidationError::AlreadyGuessed { .. })
        ));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_winning_guess_reveals_target() {
        let dictionary = test_dictionary();
        let mut session = session_with_target("code");

        let outcome = session.submit_guess("code", &dictionary).unwrap();
        match outcome {
            GuessOutcome::Accepted {
                record,
                status,
                target,
            } => {
                assert_eq!(record.score.correct_position, 4);
                assert_eq!(record.score.correct_letter, 0);
                assert_eq!(status, GameStatus::Won);
                assert_eq!(target, Some(Word::new("code")));
            }
            other => panic!("Expected accepted guess, got {:?}", other),
        }
        assert!(session.is_terminal());
    }

    #[test]
    fn test_loss_after_max_non_winning_guesses() {
        let dictionary = test_dictionary();
        let mut session = GameSession::new(Word::new("code"), 3);

        for word in ["dove", "rain", "mist"] {
            let outcome = session.submit_guess(word, &dictionary).unwrap();
            assert!(matches!(outcome, GuessOutcome::Accepted { .. }));
        }

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.revealed_target(), Some(&Word::new("code")));
    }

    #[test]
    fn test_winning_on_final_guess_beats_loss() {
        let dictionary = test_dictionary();
        let mut session = GameSession::new(Word::new("code"), 2);

        session.submit_guess("dove", &dictionary).unwrap();
        let outcome = session.submit_guess("code", &dictionary).unwrap();

        match outcome {
            GuessOutcome::Accepted { status, .. } => assert_eq!(status, GameStatus::Won),
            other => panic!("Expected accepted guess, got {:?}", other),
        }
    }

    #[test]
    fn test_terminal_session_rejects_further_guesses() {
        let dictionary = test_dictionary();
        let mut session = session_with_target("code");

        session.submit_guess("code", &dictionary).unwrap();
        assert!(session.is_terminal());

        let result = session.submit_guess("dove", &dictionary);
        assert!(matches!(result, Err(SessionError::Completed { .. })));

        // History and status stay frozen
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn test_history_is_ordered_by_submission() {
        let dictionary = test_dictionary();
        let mut session = session_with_target("code");

        for (i, word) in ["dove", "rain", "mist"].iter().enumerate() {
            session.submit_guess(word, &dictionary).unwrap();
            let record = session.history().last().unwrap();
            assert_eq!(record.guess_number as usize, i + 1);
        }
    }

    #[test]
    fn test_win_message_table() {
        assert_eq!(win_message(1), "You are one of a kind!");
        assert_eq!(win_message(4), "Fourtastic!");
        assert_eq!(win_message(8), "A hardword indeed.");
        // Clamped outside the table range
        assert_eq!(win_message(0), "You are one of a kind!");
        assert_eq!(win_message(99), "A hardword indeed.");
    }
}
