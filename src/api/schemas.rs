use crate::error::ApiError;
use crate::game::leaderboard::ScoreEntry;
use crate::game::player::Player;
use crate::game::score::Score;
use crate::game::stats::GameStats;
use crate::game::store::NewScore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const INVALID_SCORE_INPUT: &str = "Invalid input data";
pub const INVALID_PLAYER_NAME: &str = "Invalid player name";

/// Top scores, best first
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LeaderboardResponse {
    /// Always true
    pub success: bool,
    /// At most 10 entries, sorted by score descending
    pub data: Vec<ScoreEntry>,
    /// ISO-8601 time the response was generated
    pub timestamp: String,
}

/// Score submission body.
///
/// Fields are taken loosely so that wrong types surface as a 400 with the
/// standard error envelope instead of a deserialization rejection.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SubmitScoreRequest {
    /// Player name; truncated to 20 characters
    #[serde(rename = "playerName")]
    #[schema(value_type = String, example = "NewAce")]
    pub player_name: Option<Value>,
    /// Numeric score
    #[schema(value_type = f64, example = 20000)]
    pub score: Option<Value>,
    /// Game label
    #[schema(value_type = String, example = "snake")]
    pub game: Option<Value>,
}

impl SubmitScoreRequest {
    pub fn validate(self) -> Result<NewScore, ApiError> {
        let invalid = || ApiError::InvalidInput(INVALID_SCORE_INPUT);

        let player_name = non_empty_string(self.player_name).ok_or_else(invalid)?;
        let score = self
            .score
            .as_ref()
            .and_then(Score::from_json)
            .ok_or_else(invalid)?;
        let game = non_empty_string(self.game).ok_or_else(invalid)?;

        Ok(NewScore {
            player_name,
            score,
            game,
        })
    }
}

/// Response when a score is accepted
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SubmitScoreResponse {
    pub success: bool,
    /// Confirmation message
    pub message: String,
    /// The stored entry, name already truncated
    pub data: ScoreEntry,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    pub success: bool,
    pub data: GameStats,
    /// ISO-8601 time the response was generated
    pub timestamp: String,
}

/// Player registration body
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddPlayerRequest {
    /// Display name; truncated to 20 characters
    #[schema(value_type = String, example = "Alice")]
    pub name: Option<Value>,
}

impl AddPlayerRequest {
    pub fn validate(self) -> Result<String, ApiError> {
        non_empty_string(self.name).ok_or(ApiError::InvalidInput(INVALID_PLAYER_NAME))
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddPlayerResponse {
    pub success: bool,
    pub message: String,
    pub data: Player,
}

/// Every registered player in registration order
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PlayersResponse {
    pub success: bool,
    pub data: Vec<Player>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    /// "ok" while the server is accepting requests
    pub status: String,
    pub timestamp: String,
}

/// Standard error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}
