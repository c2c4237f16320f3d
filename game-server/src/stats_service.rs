use anyhow::Result;
use tokio::sync::Mutex;
use uuid::Uuid;

use game_persistence::repositories::StatsRepository;
use game_types::{Outcome, Statistics};

/// Statistics mutations are read-modify-write cycles on a shared
/// record, so concurrent session terminations must not interleave.
/// This service funnels every mutation through a single lock.
pub struct StatsService {
    repository: StatsRepository,
    write_lock: Mutex<()>,
}

impl StatsService {
    pub fn new(repository: StatsRepository) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn get_stats(&self, player_id: Uuid) -> Result<Statistics> {
        self.repository.get_stats(player_id).await
    }

    pub async fn record_outcome(&self, player_id: Uuid, outcome: Outcome) -> Result<Statistics> {
        let _guard = self.write_lock.lock().await;
        self.repository.record_outcome(player_id, outcome).await
    }

    pub async fn reset_stats(&self, player_id: Uuid) -> Result<Statistics> {
        let _guard = self.write_lock.lock().await;
        self.repository.reset_stats(player_id).await
    }
}
