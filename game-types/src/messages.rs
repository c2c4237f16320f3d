use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::{GameStatus, GuessRecord};

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewGameRequest {
    /// Player to credit statistics to; anonymous sessions skip stats.
    pub player_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewGameResponse {
    pub session_id: Uuid,
    pub word_length: u32,
    pub max_guesses: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessRequest {
    pub session_id: Uuid,
    pub guess: String,
}

/// Flat response body for a guess submission. Rejections carry only a
/// message; accepted guesses carry the score, and terminal ones also
/// reveal the target word.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_letter: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GameStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_message: Option<String>,
}

impl GuessResponse {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
            correct_position: None,
            correct_letter: None,
            status: None,
            guess_number: None,
            target_word: None,
            win_message: None,
        }
    }

    pub fn accepted(
        record: &GuessRecord,
        status: GameStatus,
        target_word: Option<String>,
        win_message: Option<String>,
    ) -> Self {
        Self {
            valid: true,
            message: None,
            correct_position: Some(record.score.correct_position),
            correct_letter: Some(record.score.correct_letter),
            status: Some(status),
            guess_number: Some(record.guess_number),
            target_word,
            win_message,
        }
    }
}
