use axum::response::IntoResponse;
use axum::Json;
use utoipa::OpenApi;

use crate::api::schemas::*;
use crate::game::leaderboard::ScoreEntry;
use crate::game::player::Player;
use crate::game::stats::GameStats;

/// OpenAPI specification for the Game Hub Backend API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Game Hub Backend API",
        version = "0.1.0",
        description = "In-memory leaderboard, player registry and site statistics for the game hub",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::api::handlers::leaderboard::get_leaderboard_handler,
        crate::api::handlers::score::submit_score_handler,
        crate::api::handlers::stats::get_stats_handler,
        crate::api::handlers::player::add_player_handler,
        crate::api::handlers::player::list_players_handler,
        crate::api::handlers::health::health_handler,
        get_openapi_json
    ),
    components(schemas(
        ScoreEntry,
        Player,
        GameStats,
        LeaderboardResponse,
        SubmitScoreRequest,
        SubmitScoreResponse,
        StatsResponse,
        AddPlayerRequest,
        AddPlayerResponse,
        PlayersResponse,
        HealthResponse,
        ErrorResponse
    )),
    tags(
        (name = "Leaderboard", description = "Top scores and score submission"),
        (name = "Statistics", description = "Site-wide aggregates"),
        (name = "Players", description = "Player registry"),
        (name = "Health", description = "Liveness"),
        (name = "Documentation", description = "API documentation endpoints")
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// Get OpenAPI specification in JSON format
///
/// Returns the complete OpenAPI 3 specification, including every endpoint
/// and schema.
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "Documentation",
    responses(
        (
            status = 200,
            description = "OpenAPI specification retrieved successfully",
            content_type = "application/json"
        )
    )
)]
pub async fn get_openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
