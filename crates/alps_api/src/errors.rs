//! Error handling and HTTP error conversion
//!
//! This module defines how domain errors are translated to HTTP error responses.
//!
//! # Architecture
//!
//! Domain errors from `alps_core` are converted to HTTP responses with
//! appropriate status codes and error messages. This conversion happens at the
//! HTTP boundary and never exposes internal implementation details: server
//! errors carry a generic message and the cause is only logged.

use alps_core::AlpsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Standard error response for all API errors.
///
/// All error responses follow this consistent structure to provide
/// machine-readable error codes and human-readable messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetails,
}

/// Error details structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Additional context (optional, type varies by error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Errors returned from handlers and extractors.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(State(state): State<AppState>) -> Result<AlpsJson<Alps>, ApiError> {
///     let alps = state.controller.alps(&base)?; // AlpsError converts to ApiError
///     Ok(AlpsJson(alps))
/// }
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Alps(#[from] AlpsError),

    /// The request carries no host to build absolute URIs from
    #[error("validation error: request has no Host header")]
    MissingHost,

    #[error("validation error: invalid request URI '{uri}': {reason}")]
    InvalidRequestUri { uri: String, reason: String },

    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = convert_error(&self);

        // Log error server-side
        log_error(&self, status);

        (status, Json(error_response)).into_response()
    }
}

/// Convert an API error to HTTP status code and error response
pub(crate) fn convert_error(error: &ApiError) -> (StatusCode, ErrorResponse) {
    let (status, code, message, details) = match error {
        ApiError::Alps(AlpsError::UnknownRepository { name }) => (
            StatusCode::NOT_FOUND,
            "NotFound",
            error.to_string(),
            Some(json!({ "repository": name })),
        ),
        ApiError::MissingHost => (
            StatusCode::BAD_REQUEST,
            "ValidationError",
            "Request must include a Host header".to_string(),
            Some(json!({ "header": "Host" })),
        ),
        ApiError::InvalidRequestUri { uri, .. } => (
            StatusCode::BAD_REQUEST,
            "ValidationError",
            "Request URI cannot be used as a base URI".to_string(),
            Some(json!({ "uri": uri })),
        ),
        ApiError::Alps(_) | ApiError::Serialization(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            "An internal error occurred".to_string(),
            None,
        ),
    };

    (
        status,
        ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message,
                details,
            },
        },
    )
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ApiError, status: StatusCode) {
    match status {
        StatusCode::INTERNAL_SERVER_ERROR => {
            tracing::error!("API error: {} - {}", status, error);
        }
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
            tracing::warn!("API error: {} - {}", status, error);
        }
        _ => {
            tracing::info!("API error: {} - {}", status, error);
        }
    }
}
