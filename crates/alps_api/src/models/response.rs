//! HTTP response type definitions
//!
//! ALPS documents are sent with the `application/alps+json` media type via
//! [`AlpsJson`]; everything else uses plain JSON.

use alps_core::ALPS_JSON_MEDIA_TYPE;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;

/// JSON response body served as `application/alps+json`.
///
/// The body is serialized completely before any response is produced; a
/// serialization failure becomes a 500 error response instead.
#[derive(Debug, Clone)]
pub struct AlpsJson<T>(pub T);

impl<T> IntoResponse for AlpsJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                StatusCode::OK,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(ALPS_JSON_MEDIA_TYPE),
                )],
                body,
            )
                .into_response(),
            Err(err) => ApiError::from(err).into_response(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status: "healthy" or "unhealthy"
    pub status: String,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Current timestamp (ISO 8601)
    pub timestamp: String,

    /// Number of repositories registered for ALPS publication
    pub repositories: usize,
}
