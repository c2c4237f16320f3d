use anyhow::Result;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::entities::{player_stats, prelude::PlayerStats};
use game_core::StatsAggregator;
use game_types::{LastResult, Outcome, Statistics};

/// Persisted per-player statistics, one row per player key.
///
/// `record_outcome` is a read-modify-write; callers must serialize
/// concurrent calls for the same player (the server wraps this
/// repository in a single writer lock).
pub struct StatsRepository {
    db: DatabaseConnection,
}

impl StatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_stats(model: &player_stats::Model) -> Statistics {
        let games_played = model.games_played.max(0) as u32;
        let wins = model.wins.max(0) as u32;

        Statistics {
            games_played,
            wins,
            current_streak: model.current_streak.max(0) as u32,
            last_result: parse_last_result(&model.last_result),
            win_percent: StatsAggregator::win_percent(wins, games_played),
        }
    }

    /// Statistics for a player, all-zero if they have never finished a
    /// game.
    pub async fn get_stats(&self, player_id: Uuid) -> Result<Statistics> {
        let model = PlayerStats::find_by_id(player_id).one(&self.db).await?;
        Ok(model
            .map(|m| Self::model_to_stats(&m))
            .unwrap_or_default())
    }

    /// Fold one terminal session outcome into the player's record and
    /// return the updated statistics.
    pub async fn record_outcome(&self, player_id: Uuid, outcome: Outcome) -> Result<Statistics> {
        let now = chrono::Utc::now().into();
        let existing = PlayerStats::find_by_id(player_id).one(&self.db).await?;

        match existing {
            Some(model) => {
                let updated = StatsAggregator::record_outcome(&Self::model_to_stats(&model), outcome);

                let active = player_stats::ActiveModel {
                    player_id: ActiveValue::Unchanged(model.player_id),
                    games_played: ActiveValue::Set(updated.games_played as i32),
                    wins: ActiveValue::Set(updated.wins as i32),
                    current_streak: ActiveValue::Set(updated.current_streak as i32),
                    last_result: ActiveValue::Set(last_result_to_string(updated.last_result)),
                    created_at: ActiveValue::Unchanged(model.created_at),
                    updated_at: ActiveValue::Set(now),
                };
                PlayerStats::update(active).exec(&self.db).await?;

                Ok(updated)
            }
            None => {
                let updated = StatsAggregator::record_outcome(&Statistics::default(), outcome);

                let active = player_stats::ActiveModel {
                    player_id: ActiveValue::Set(player_id),
                    games_played: ActiveValue::Set(updated.games_played as i32),
                    wins: ActiveValue::Set(updated.wins as i32),
                    current_streak: ActiveValue::Set(updated.current_streak as i32),
                    last_result: ActiveValue::Set(last_result_to_string(updated.last_result)),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                };
                PlayerStats::insert(active).exec(&self.db).await?;

                Ok(updated)
            }
        }
    }

    /// Clear the player's counters back to zero.
    pub async fn reset_stats(&self, player_id: Uuid) -> Result<Statistics> {
        PlayerStats::delete_by_id(player_id).exec(&self.db).await?;
        Ok(StatsAggregator::reset())
    }
}

fn last_result_to_string(last_result: LastResult) -> String {
    match last_result {
        LastResult::Win => "win",
        LastResult::Lose => "lose",
        LastResult::None => "none",
    }
    .to_string()
}

fn parse_last_result(raw: &str) -> LastResult {
    match raw {
        "win" => LastResult::Win,
        "lose" => LastResult::Lose,
        _ => LastResult::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use migration::{Migrator, MigratorTrait};

    async fn setup_test_db() -> StatsRepository {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        StatsRepository::new(db)
    }

    #[tokio::test]
    async fn test_stats_default_to_zero() {
        let repo = setup_test_db().await;

        let stats = repo.get_stats(Uuid::new_v4()).await.unwrap();
        assert_eq!(stats, Statistics::default());
    }

    #[tokio::test]
    async fn test_record_outcome_sequence() {
        let repo = setup_test_db().await;
        let player_id = Uuid::new_v4();

        let stats = repo.record_outcome(player_id, Outcome::Win).await.unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.win_percent, 100);

        let stats = repo.record_outcome(player_id, Outcome::Win).await.unwrap();
        assert_eq!(stats.current_streak, 2);

        let stats = repo.record_outcome(player_id, Outcome::Lose).await.unwrap();
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.last_result, LastResult::Lose);
        assert_eq!(stats.win_percent, 67);

        // Round-trips through the database
        let loaded = repo.get_stats(player_id).await.unwrap();
        assert_eq!(loaded, stats);
    }

    #[tokio::test]
    async fn test_players_are_independent() {
        let repo = setup_test_db().await;
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        repo.record_outcome(alice, Outcome::Win).await.unwrap();
        repo.record_outcome(bob, Outcome::Lose).await.unwrap();

        assert_eq!(repo.get_stats(alice).await.unwrap().wins, 1);
        assert_eq!(repo.get_stats(bob).await.unwrap().wins, 0);
    }

    #[tokio::test]
    async fn test_reset_clears_record() {
        let repo = setup_test_db().await;
        let player_id = Uuid::new_v4();

        repo.record_outcome(player_id, Outcome::Win).await.unwrap();
        let stats = repo.reset_stats(player_id).await.unwrap();
        assert_eq!(stats, Statistics::default());

        let loaded = repo.get_stats(player_id).await.unwrap();
        assert_eq!(loaded, Statistics::default());

        // Resetting a player with no record is fine
        repo.reset_stats(Uuid::new_v4()).await.unwrap();
    }
}
