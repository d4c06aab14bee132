//! Tests for server configuration

use super::*;
use serial_test::serial;
use std::collections::HashMap;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults_when_unset() {
    let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();

    assert_eq!(config, ApiConfig::default());
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert!(config.catalog_path.is_none());
}

#[test]
fn test_all_values_read() {
    let config = ApiConfig::from_lookup(lookup_from(&[
        ("API_PORT", "9090"),
        ("API_HOST", "127.0.0.1"),
        ("API_REQUEST_TIMEOUT_SECS", "5"),
        ("ALPS_CATALOG_PATH", "/etc/alps/catalog.toml"),
    ]))
    .unwrap();

    assert_eq!(config.port, 9090);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.request_timeout, Duration::from_secs(5));
    assert_eq!(
        config.catalog_path,
        Some(PathBuf::from("/etc/alps/catalog.toml"))
    );
}

#[test]
fn test_empty_values_fall_back_to_defaults() {
    let config =
        ApiConfig::from_lookup(lookup_from(&[("API_PORT", ""), ("ALPS_CATALOG_PATH", "  ")]))
            .unwrap();

    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.catalog_path.is_none());
}

#[test]
fn test_invalid_port() {
    let err = ApiConfig::from_lookup(lookup_from(&[("API_PORT", "eighty")])).unwrap_err();

    let ConfigError::InvalidValue { key, value, .. } = err;
    assert_eq!(key, "API_PORT");
    assert_eq!(value, "eighty");
}

#[test]
fn test_port_out_of_range() {
    assert!(ApiConfig::from_lookup(lookup_from(&[("API_PORT", "70000")])).is_err());
}

#[test]
fn test_zero_timeout_rejected() {
    let err =
        ApiConfig::from_lookup(lookup_from(&[("API_REQUEST_TIMEOUT_SECS", "0")])).unwrap_err();

    assert!(err.to_string().contains("API_REQUEST_TIMEOUT_SECS"));
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    env::set_var("API_PORT", "8181");
    env::remove_var("ALPS_CATALOG_PATH");

    let config = ApiConfig::from_env();

    env::remove_var("API_PORT");

    let config = config.unwrap();
    assert_eq!(config.port, 8181);
    assert!(config.catalog_path.is_none());
}
