//! HTTP routing configuration
//!
//! # Route Structure
//!
//! - GET /alps - ALPS document listing every exposed repository
//! - GET /alps/:repository - ALPS document of one repository
//! - GET /health - Health check

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, middleware as api_middleware, AppState};

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

/// Create the complete API router with all routes configured.
///
/// This function sets up:
/// - All endpoint routes
/// - CORS configuration (read-only methods)
/// - Request tracing
/// - Timeout handling
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    // The API is read-only
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(false)
        // Cache preflight responses for 1 hour
        .max_age(Duration::from_secs(3600));

    // Configure request tracing
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(true))
        .on_response(DefaultOnResponse::new().include_headers(true));

    let timeout_layer = TimeoutLayer::new(request_timeout);

    Router::new()
        .merge(alps_routes())
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(timeout_layer)
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

/// ALPS document routes
fn alps_routes() -> Router<AppState> {
    Router::new()
        .route("/alps", get(handlers::alps))
        .route("/alps/:repository", get(handlers::descriptor))
}
