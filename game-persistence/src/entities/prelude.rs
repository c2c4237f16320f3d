pub use super::player_stats::Entity as PlayerStats;
