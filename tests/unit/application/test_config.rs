use libawesome_client::application::config::{ApiHost, Config};
use libawesome_client::constants::{DEFAULT_AUTH_SCHEME, DEFAULT_TIMEOUT_SECS};
use std::time::Duration;

#[test]
fn test_with_base_url_defaults() {
    let config = Config::with_base_url("https://libawesome.example.com/api/");
    assert_eq!(config.auth_scheme, DEFAULT_AUTH_SCHEME);
    assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}

#[test]
fn test_validate_builds_endpoints() {
    let host = Config::with_base_url("http://localhost:8000/api")
        .validate()
        .unwrap();
    assert_eq!(
        host.auth_token_url().as_str(),
        "http://localhost:8000/api/auth-token/"
    );
    assert_eq!(host.book_url(12), "http://localhost:8000/api/books/12/");
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = Config::with_base_url("http://localhost/");
    let json = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_api_host_equality_ignores_trailing_slash() {
    assert_eq!(
        ApiHost::parse("http://localhost/api").unwrap(),
        ApiHost::parse("http://localhost/api/").unwrap()
    );
}

#[test]
fn test_timeout_ignores_environment_override() {
    unsafe {
        std::env::set_var("LIBAWESOME_TIMEOUT", "1");
    }
    let config = Config::new();
    unsafe {
        std::env::remove_var("LIBAWESOME_TIMEOUT");
    }
    assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    let json = serde_json::to_value(&config.rest_api).unwrap();
    assert!(json.get("timeout").is_none());
}
