//! Request middleware
//!
//! Adds a request ID to every request for log correlation.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

#[cfg(test)]
#[path = "middleware_tests.rs"]
mod tests;

/// Response header carrying the request ID
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request tracing middleware.
///
/// Generates a request ID, logs request start and completion with it, and
/// echoes it in the `x-request-id` response header.
pub async fn tracing_middleware(request: Request, next: Next) -> Response {
    // Generate request ID
    let request_id = uuid::Uuid::new_v4().to_string();

    // Log request start
    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "Request started"
    );

    let mut response = next.run(request).await;

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
