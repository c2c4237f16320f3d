use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

/// Why a raw guess was rejected before evaluation. A rejected guess
/// never consumes a turn; the player may resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ValidationError {
    #[error("Word must be exactly {expected} letters")]
    InvalidLength { expected: u32, actual: u32 },
    #[error("Only letters are allowed")]
    InvalidCharacter { found: char },
    #[error("Repeating letters not allowed")]
    RepeatingLetter { letter: char },
    #[error("Word not in list")]
    NotInDictionary { word: String },
    #[error("Word already guessed")]
    AlreadyGuessed { word: String },
}

/// Protocol-level misuse of a session, distinct from a bad guess: the
/// caller referenced a session that does not exist or is finished.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SessionError {
    #[error("Session {session_id} not found")]
    NotFound { session_id: Uuid },
    #[error("Session {session_id} is already finished")]
    Completed { session_id: Uuid },
}
