use crate::api::schemas::HealthResponse;
use crate::timestamp::TimestampManager;
use axum::Json;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
        timestamp: TimestampManager::iso_now(),
    })
}
