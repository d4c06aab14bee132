//! Request extractors
//!
//! Extractors turn request context into explicit handler parameters:
//!
//! - [`CurrentRequestUri`] - the absolute URI of the request being served
//! - [`ResolvedResource`] - the `{repository}` path segment resolved to its
//!   resource information, rejecting unknown names with 404

use alps_core::{BaseUri, RootResourceInformation};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, OriginalUri, Path},
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Response},
};

use crate::{errors::ApiError, AppState};

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;

/// Header set by reverse proxies carrying the client-facing scheme
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Absolute URI of the current request, without query or fragment.
///
/// The scheme comes from the request URI, then `X-Forwarded-Proto`, then
/// defaults to `http`. The authority comes from the request URI, then the
/// `Host` header.
#[derive(Debug, Clone)]
pub struct CurrentRequestUri(pub BaseUri);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentRequestUri
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Nested routers strip their prefix from parts.uri
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| original.0.clone())
            .unwrap_or_else(|| parts.uri.clone());

        let scheme = uri
            .scheme_str()
            .map(str::to_string)
            .or_else(|| forwarded_proto(&parts.headers))
            .unwrap_or_else(|| "http".to_string());

        let authority = uri
            .authority()
            .map(|authority| authority.as_str().to_string())
            .or_else(|| {
                parts
                    .headers
                    .get(header::HOST)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string)
            })
            .ok_or(ApiError::MissingHost)?;

        let absolute = format!("{}://{}{}", scheme, authority, uri.path());

        BaseUri::parse(&absolute)
            .map(CurrentRequestUri)
            .map_err(|e| ApiError::InvalidRequestUri {
                uri: absolute,
                reason: e.to_string(),
            })
    }
}

/// First `X-Forwarded-Proto` value, if it is `http` or `https`.
fn forwarded_proto(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(X_FORWARDED_PROTO)?.to_str().ok()?;
    let proto = value.split(',').next()?.trim().to_ascii_lowercase();

    match proto.as_str() {
        "http" | "https" => Some(proto),
        _ => None,
    }
}

/// Resource information for the `{repository}` path parameter.
///
/// Handlers taking this extractor only run for known, exported
/// repositories.
#[derive(Debug, Clone)]
pub struct ResolvedResource(pub RootResourceInformation);

#[async_trait]
impl FromRequestParts<AppState> for ResolvedResource {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(repository) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        state
            .resolver
            .resolve(&repository)
            .map(ResolvedResource)
            .map_err(|e| ApiError::from(e).into_response())
    }
}
