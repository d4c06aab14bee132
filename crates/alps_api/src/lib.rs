//! ALPS REST API
//!
//! This crate exposes the ALPS descriptions built by `alps_core` over HTTP.
//!
//! # Architecture
//!
//! This crate exists in the HTTP layer and handles:
//! - HTTP request/response translation
//! - Request context extraction (current URI, resolved repository)
//! - Error mapping from domain to HTTP
//! - Routing and server configuration
//!
//! The dependency flows: HTTP API → `alps_core`, never the reverse.
//!
//! # Routes
//!
//! - GET /alps - ALPS document listing every exposed repository
//! - GET /alps/:repository - ALPS document of one repository
//! - GET /health - Health check

use std::sync::Arc;

use alps_core::{
    AlpsController, AlpsDescriptorConverter, Catalog, DescriptorConverter, RepositoryRegistry,
    ResourceMappings, ResourceResolver,
};

pub mod config;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

// Re-export key types for convenience
pub use config::{ApiConfig, ConfigError};
pub use errors::{ApiError, ErrorResponse};
pub use server::ApiServer;

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Application state shared across handlers
///
/// Holds the read-only collaborators; cloning is cheap and every request
/// sees the same instances.
#[derive(Clone)]
pub struct AppState {
    /// Builds the top-level ALPS document
    pub controller: AlpsController,

    /// Resolves `{repository}` path segments
    pub resolver: ResourceResolver,

    registry: Arc<dyn RepositoryRegistry>,
}

impl AppState {
    /// Create application state from the three collaborators.
    pub fn new(
        registry: Arc<dyn RepositoryRegistry>,
        converter: Arc<dyn DescriptorConverter>,
        mappings: Arc<dyn ResourceMappings>,
    ) -> Self {
        Self {
            controller: AlpsController::new(registry.clone(), converter.clone(), mappings.clone()),
            resolver: ResourceResolver::new(mappings, converter),
            registry,
        }
    }

    /// Create application state serving the repositories of `catalog` with
    /// the default converter.
    pub fn from_catalog(catalog: Catalog) -> Self {
        let (registry, mappings) = catalog.into_parts();
        Self::new(
            Arc::new(registry),
            Arc::new(AlpsDescriptorConverter::new()),
            Arc::new(mappings),
        )
    }

    /// Number of registered repositories.
    pub fn repository_count(&self) -> usize {
        self.registry.domain_types().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_catalog(Catalog::default())
    }
}
