use crate::api::schemas::{
    AddPlayerRequest, AddPlayerResponse, ErrorResponse, PlayersResponse, INVALID_PLAYER_NAME,
};
use crate::error::ApiError;
use crate::state::AppState;
use crate::timestamp::TimestampManager;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

/// Register a player
///
/// The player id is the creation time in epoch milliseconds, bumped by one
/// when two players land in the same millisecond.
#[utoipa::path(
    post,
    path = "/api/player",
    tag = "Players",
    request_body = AddPlayerRequest,
    responses(
        (status = 200, description = "Player added", body = AddPlayerResponse),
        (status = 400, description = "Missing or non-string name", body = ErrorResponse),
        (status = 500, description = "Failed to add player", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn add_player_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddPlayerRequest>, JsonRejection>,
) -> Result<Json<AddPlayerResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Unreadable player registration");
        ApiError::InvalidInput(INVALID_PLAYER_NAME)
    })?;
    let name = request.validate()?;

    // Clock before the epoch
    let now = u64::try_from(TimestampManager::now())
        .map_err(|_| ApiError::Internal("Failed to add player"))?;

    let player = state.write().await.add_player(&name, now);

    tracing::info!(
        id = player.id,
        name = %player.name,
        created = %TimestampManager::format(now as i64),
        "Player added"
    );

    Ok(Json(AddPlayerResponse {
        success: true,
        message: "Player added!".to_string(),
        data: player,
    }))
}

/// List all players
#[utoipa::path(
    get,
    path = "/api/players",
    tag = "Players",
    responses(
        (status = 200, description = "All registered players", body = PlayersResponse),
        (status = 500, description = "Failed to fetch players", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_players_handler(
    State(state): State<AppState>,
) -> Result<Json<PlayersResponse>, ApiError> {
    let data = state.read().await.players().to_vec();

    Ok(Json(PlayersResponse {
        success: true,
        data,
    }))
}
