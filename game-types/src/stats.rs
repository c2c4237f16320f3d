use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Outcome {
    Win,
    Lose,
}

/// Outcome of the most recent finished session, `None` before any
/// session has finished (or after a reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LastResult {
    Win,
    Lose,
    #[default]
    None,
}

/// Per-player aggregate counters, updated once per finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Statistics {
    pub games_played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub last_result: LastResult,
    pub win_percent: u32,
}
