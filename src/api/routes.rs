use crate::api::handlers::{health, leaderboard, openapi, player, score, stats};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

pub fn create_router(state: AppState, cors: Option<CorsLayer>) -> Router {
    let router = Router::new()
        .route(
            "/api/leaderboard",
            get(leaderboard::get_leaderboard_handler).layer(fail_with(leaderboard_failed)),
        )
        .route(
            "/api/score",
            post(score::submit_score_handler).layer(fail_with(score_failed)),
        )
        .route(
            "/api/stats",
            get(stats::get_stats_handler).layer(fail_with(stats_failed)),
        )
        .route(
            "/api/player",
            post(player::add_player_handler).layer(fail_with(add_player_failed)),
        )
        .route(
            "/api/players",
            get(player::list_players_handler).layer(fail_with(players_failed)),
        )
        .route("/api/health", get(health::health_handler))
        .route("/openapi.json", get(openapi::get_openapi_json))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// CORS for a single origin, or any origin when given `*`
pub fn cors_layer(origin: &str) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(origin.parse::<HeaderValue>()?)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

fn fail_with(handler: PanicHandler) -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handler)
}

fn leaderboard_failed(panic: Box<dyn Any + Send + 'static>) -> Response {
    internal_fault(panic, "Failed to fetch leaderboard")
}

fn score_failed(panic: Box<dyn Any + Send + 'static>) -> Response {
    internal_fault(panic, "Failed to submit score")
}

fn stats_failed(panic: Box<dyn Any + Send + 'static>) -> Response {
    internal_fault(panic, "Failed to fetch game stats")
}

fn add_player_failed(panic: Box<dyn Any + Send + 'static>) -> Response {
    internal_fault(panic, "Failed to add player")
}

fn players_failed(panic: Box<dyn Any + Send + 'static>) -> Response {
    internal_fault(panic, "Failed to fetch players")
}

fn internal_fault(panic: Box<dyn Any + Send + 'static>, message: &'static str) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Handler panicked");

    ApiError::Internal(message).into_response()
}
