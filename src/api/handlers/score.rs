use crate::api::schemas::{
    ErrorResponse, SubmitScoreRequest, SubmitScoreResponse, INVALID_SCORE_INPUT,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

/// Submit a score
///
/// Appends the score to the leaderboard and updates the site statistics:
/// `gamesPlayed` goes up by one, `topScore` rises if beaten, and
/// `totalPlayers` becomes at least the leaderboard length.
#[utoipa::path(
    post,
    path = "/api/score",
    tag = "Leaderboard",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score submitted", body = SubmitScoreResponse),
        (status = 400, description = "Missing name or game, or non-numeric score", body = ErrorResponse),
        (status = 500, description = "Failed to submit score", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn submit_score_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<Json<SubmitScoreResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Unreadable score submission");
        ApiError::InvalidInput(INVALID_SCORE_INPUT)
    })?;

    let new_score = request.validate().inspect_err(|_| {
        tracing::warn!("Rejected score submission");
    })?;

    let entry = state.write().await.submit_score(new_score);

    tracing::info!(
        player = %entry.name,
        score = %entry.score,
        game = %entry.game,
        "Score submitted"
    );

    Ok(Json(SubmitScoreResponse {
        success: true,
        message: "Score submitted successfully!".to_string(),
        data: entry,
    }))
}
