use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub type SessionId = Uuid;

/// A normalized game word: uppercase ASCII letters, fixed length.
///
/// Dictionary entries and accepted guesses are both `Word`s; raw player
/// input only becomes a `Word` after passing validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Word(String);

impl Word {
    /// Wrap a string as a word, normalizing to uppercase.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two-part score for a single guess: letters correct and in place
/// ("bulls"), and correct letters in the wrong place ("cows").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Score {
    pub correct_position: u32,
    pub correct_letter: u32,
}

impl Score {
    /// A guess wins exactly when every letter is in the right place.
    pub fn is_win(&self, word_length: usize) -> bool {
        self.correct_position as usize == word_length
    }
}

/// One accepted guess and its score, immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessRecord {
    pub word: Word,
    pub score: Score,
    pub guess_number: u32,
    pub timestamp: String, // ISO 8601 string
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameStatus {
    #[serde(rename = "active")]
    Active, // Accepting guesses
    #[serde(rename = "win")]
    Won, // Target guessed within the limit
    #[serde(rename = "lose")]
    Lost, // Guess limit exhausted
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}
