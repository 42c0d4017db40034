use super::score::Score;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Site-wide aggregate statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    /// Despite the name, this tracks the largest leaderboard length seen,
    /// not the number of distinct players.
    pub total_players: u64,
    /// Number of score submissions
    pub games_played: u64,
    /// Highest score ever submitted
    #[schema(value_type = f64)]
    pub top_score: Score,
}

impl GameStats {
    /// Fold one accepted submission into the aggregates.
    /// `leaderboard_len` is the length after the new entry was appended.
    pub fn record_submission(&mut self, score: Score, leaderboard_len: usize) {
        self.total_players = self.total_players.max(leaderboard_len as u64);
        self.games_played += 1;
        self.top_score = self.top_score.max(score);
    }
}
