//! HTTP request handlers
//!
//! Handlers take their request context as explicit extractor parameters,
//! call into `alps_core` and translate the result into a response.

use alps_core::{Alps, RootResourceInformation};
use axum::{extract::State, Json};

use crate::{
    errors::ApiError,
    extract::{CurrentRequestUri, ResolvedResource},
    models::response::{AlpsJson, HealthCheckResponse},
    AppState,
};

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

/// GET /alps
///
/// ALPS document with one descriptor per registered repository, each
/// linking to `/alps/<rel>` under the current request URI.
pub async fn alps(
    State(state): State<AppState>,
    CurrentRequestUri(base): CurrentRequestUri,
) -> Result<AlpsJson<Alps>, ApiError> {
    let alps = state.controller.alps(&base)?;
    Ok(AlpsJson(alps))
}

/// GET /alps/:repository
///
/// ALPS document of one repository. Unknown names never reach this handler;
/// [`ResolvedResource`] rejects them with 404.
pub async fn descriptor(
    State(state): State<AppState>,
    ResolvedResource(information): ResolvedResource,
) -> AlpsJson<RootResourceInformation> {
    AlpsJson(state.controller.descriptor(information))
}

/// GET /health
///
/// Returns service health status with version and timestamp.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        timestamp: chrono::Utc::now().to_rfc3339(),
        repositories: state.repository_count(),
    })
}
