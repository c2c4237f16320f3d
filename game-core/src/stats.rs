use game_types::{LastResult, Outcome, Statistics};

pub struct StatsAggregator;

impl StatsAggregator {
    /// Fold one terminal outcome into the counters.
    ///
    /// Pure transform; callers must apply it exactly once per finished
    /// session and serialize concurrent applications to the same
    /// record.
    pub fn record_outcome(stats: &Statistics, outcome: Outcome) -> Statistics {
        let games_played = stats.games_played + 1;
        let (wins, current_streak, last_result) = match outcome {
            Outcome::Win => {
                let streak = if stats.last_result == LastResult::Win {
                    stats.current_streak + 1
                } else {
                    1
                };
                (stats.wins + 1, streak, LastResult::Win)
            }
            Outcome::Lose => (stats.wins, 0, LastResult::Lose),
        };

        Statistics {
            games_played,
            wins,
            current_streak,
            last_result,
            win_percent: Self::win_percent(wins, games_played),
        }
    }

    /// Clear every counter. Independent of any session state.
    pub fn reset() -> Statistics {
        Statistics::default()
    }

    /// Integer win percentage, rounded to nearest.
    pub fn win_percent(wins: u32, games_played: u32) -> u32 {
        if games_played == 0 {
            0
        } else {
            (wins * 200 + games_played) / (games_played * 2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_win_from_zero() {
        let stats = StatsAggregator::record_outcome(&Statistics::default(), Outcome::Win);
        assert_eq!(
            stats,
            Statistics {
                games_played: 1,
                wins: 1,
                current_streak: 1,
                last_result: LastResult::Win,
                win_percent: 100,
            }
        );
    }

    #[test]
    fn test_win_win_lose_sequence() {
        let stats = StatsAggregator::record_outcome(&Statistics::default(), Outcome::Win);
        let stats = StatsAggregator::record_outcome(&stats, Outcome::Win);
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.win_percent, 100);

        let stats = StatsAggregator::record_outcome(&stats, Outcome::Lose);
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.last_result, LastResult::Lose);
        assert_eq!(stats.win_percent, 67);
    }

    #[test]
    fn test_streak_restarts_at_one_after_loss() {
        let stats = StatsAggregator::record_outcome(&Statistics::default(), Outcome::Lose);
        let stats = StatsAggregator::record_outcome(&stats, Outcome::Win);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.last_result, LastResult::Win);
    }

    #[test]
    fn test_loss_keeps_wins() {
        let stats = StatsAggregator::record_outcome(&Statistics::default(), Outcome::Win);
        let stats = StatsAggregator::record_outcome(&stats, Outcome::Lose);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.win_percent, 50);
    }

    #[test]
    fn test_win_percent_rounding() {
        assert_eq!(StatsAggregator::win_percent(0, 0), 0);
        assert_eq!(StatsAggregator::win_percent(1, 3), 33);
        assert_eq!(StatsAggregator::win_percent(2, 3), 67);
        assert_eq!(StatsAggregator::win_percent(1, 8), 13); // 12.5 rounds up
        assert_eq!(StatsAggregator::win_percent(1, 2), 50);
    }

    #[test]
    fn test_reset_clears_everything() {
        let stats = StatsAggregator::record_outcome(&Statistics::default(), Outcome::Win);
        assert_ne!(stats, Statistics::default());
        assert_eq!(StatsAggregator::reset(), Statistics::default());
    }
}
