//! HTTP error mapping
//!
//! Domain errors carry enough structure to pick a status code without
//! string matching. Every error response is a JSON object with a single
//! `error` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mesa_core::errors::MesaError;
use serde_json::json;
use tracing::error;

/// Error type returned by every handler
#[derive(Debug)]
pub enum ApiError {
    /// Admin endpoint called without a valid bearer token
    Unauthorized,

    /// Anything the domain or storage layer reported
    Domain(MesaError),
}

impl From<MesaError> for ApiError {
    fn from(err: MesaError) -> Self {
        ApiError::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Missing or invalid admin token".to_string(),
            ),
            ApiError::Domain(err) => {
                let status = if err.is_validation() {
                    StatusCode::BAD_REQUEST
                } else {
                    match err {
                        MesaError::ReservationNotFound { .. } => StatusCode::NOT_FOUND,
                        MesaError::InvalidTransition { .. } => StatusCode::CONFLICT,
                        _ => StatusCode::INTERNAL_SERVER_ERROR,
                    }
                };
                (status, err.to_string())
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(%message, "request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
