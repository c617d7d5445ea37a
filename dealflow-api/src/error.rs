//! HTTP mapping for matcher errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dealflow_core::DealflowError;
use serde::Serialize;
use tracing::error;

/// Error body returned to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Handler error wrapping `DealflowError`
#[derive(Debug)]
pub struct ApiError(pub DealflowError);

impl From<DealflowError> for ApiError {
    fn from(err: DealflowError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self.0 {
            // Missing credentials surface with their fixed message
            DealflowError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            err @ (DealflowError::Embedding(_) | DealflowError::Generation(_)) => {
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            err => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        error!("Request failed ({}): {}", status, detail);
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
