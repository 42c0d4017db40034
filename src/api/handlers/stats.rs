use crate::api::schemas::{ErrorResponse, StatsResponse};
use crate::error::ApiError;
use crate::state::AppState;
use crate::timestamp::TimestampManager;
use axum::{extract::State, Json};

/// Get site statistics
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "Statistics",
    responses(
        (status = 200, description = "Current statistics", body = StatsResponse),
        (status = 500, description = "Failed to fetch game stats", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, ApiError> {
    let data = state.read().await.stats().clone();

    Ok(Json(StatsResponse {
        success: true,
        data,
        timestamp: TimestampManager::iso_now(),
    }))
}
