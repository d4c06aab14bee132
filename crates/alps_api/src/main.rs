//! ALPS API Server
//!
//! Main binary for running the API server in production or development.
//!
//! # Environment Variables
//!
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `API_REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 30)
//! - `ALPS_CATALOG_PATH`: TOML repository catalog (default: none)
//! - `RUST_LOG`: Log level (default: info)

use alps_api::{ApiConfig, ApiServer, AppState};
use alps_core::Catalog;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => {
            tracing::warn!("ALPS_CATALOG_PATH not set, serving an empty repository registry");
            Catalog::default()
        }
    };

    let state = AppState::from_catalog(catalog);

    tracing::info!("Starting ALPS API server");
    tracing::info!("Registered repositories: {}", state.repository_count());

    // Start server with graceful shutdown
    ApiServer::new(config, state).serve().await
}
