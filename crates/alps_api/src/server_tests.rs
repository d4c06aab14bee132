//! Tests for server module

use super::*;

#[test]
fn test_server_creation() {
    let server = ApiServer::new(ApiConfig::default(), AppState::default());
    let _router = server.router();
    // Server and router creation should succeed
}

#[tokio::test]
async fn test_serve_rejects_invalid_host() {
    let config = ApiConfig {
        host: "not-an-ip".to_string(),
        ..ApiConfig::default()
    };

    let result = ApiServer::new(config, AppState::default()).serve().await;

    assert!(result.is_err());
}
