use crate::api::schemas::ErrorResponse;
use axum::http::header::InvalidHeaderValue;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::net::AddrParseError;
use thiserror::Error;

/// Errors a request handler can return.
///
/// Messages are fixed per endpoint and never carry internal detail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing required fields
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Unexpected failure while handling the request
    #[error("{0}")]
    Internal(&'static str),

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Failures while bringing the server up
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("invalid listen address: {0}")]
    Address(#[from] AddrParseError),

    #[error("invalid CORS origin: {0}")]
    CorsOrigin(#[from] InvalidHeaderValue),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for StartupError {
    fn from(err: figment::Error) -> Self {
        StartupError::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidInput("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let response = ApiError::InvalidInput("Invalid input data").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "Invalid input data"})
        );
    }
}
