use crate::api::schemas::{ErrorResponse, LeaderboardResponse};
use crate::error::ApiError;
use crate::game::leaderboard::TOP_SCORES_LIMIT;
use crate::state::AppState;
use crate::timestamp::TimestampManager;
use axum::{extract::State, Json};

/// Get the top 10 scores
///
/// Returns the leaderboard sorted by score, highest first. Equal scores are
/// listed in submission order. Reading never changes the stored order.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = "Leaderboard",
    responses(
        (status = 200, description = "Top scores retrieved", body = LeaderboardResponse),
        (status = 500, description = "Failed to fetch leaderboard", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_leaderboard_handler(
    State(state): State<AppState>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let data = state.read().await.top_scores(TOP_SCORES_LIMIT);

    Ok(Json(LeaderboardResponse {
        success: true,
        data,
        timestamp: TimestampManager::iso_now(),
    }))
}
