use crate::config::{Config, ConfigError};
use coursemgr_auth::{AuthContext, SessionStore};
use coursemgr_core::{MaskedUser, Reconcile};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const VARS: [&str; 4] = [
    "COURSEMGR_API_URL",
    "COURSEMGR_SESSION_FILE",
    "COURSEMGR_RECONCILE",
    "COURSEMGR_HTTP_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.api_url, "http://localhost:8080");
    assert_eq!(config.reconcile, Reconcile::Patch);
    assert_eq!(config.http_timeout, None);
    assert!(config.session_file.ends_with(".coursemgr/session.toml"));
}

#[test]
#[serial]
fn test_config_from_env_with_all_custom() {
    clear_env();
    env::set_var("COURSEMGR_API_URL", "https://courses.example.com");
    env::set_var("COURSEMGR_SESSION_FILE", "/tmp/coursemgr-test/session.toml");
    env::set_var("COURSEMGR_RECONCILE", "Refetch");
    env::set_var("COURSEMGR_HTTP_TIMEOUT_SECS", "15");

    let config = Config::from_env().unwrap();

    assert_eq!(config.api_url, "https://courses.example.com");
    assert_eq!(config.session_file, PathBuf::from("/tmp/coursemgr-test/session.toml"));
    assert_eq!(config.reconcile, Reconcile::Refetch);
    assert_eq!(config.http_timeout, Some(Duration::from_secs(15)));
    assert_eq!(config.session_store().path(), config.session_file.as_path());

    clear_env();
}

#[test]
#[serial]
fn test_blank_values_fall_back_to_defaults() {
    clear_env();
    env::set_var("COURSEMGR_API_URL", "   ");
    env::set_var("COURSEMGR_HTTP_TIMEOUT_SECS", "");

    let config = Config::from_env().unwrap();

    assert_eq!(config.api_url, "http://localhost:8080");
    assert_eq!(config.http_timeout, None);

    clear_env();
}

#[rstest]
#[case("COURSEMGR_API_URL", "localhost:8080")]
#[case("COURSEMGR_HTTP_TIMEOUT_SECS", "soon")]
#[case("COURSEMGR_HTTP_TIMEOUT_SECS", "0")]
#[case("COURSEMGR_RECONCILE", "optimistic")]
#[serial]
fn test_config_invalid_values(#[case] var: &str, #[case] value: &str) {
    clear_env();
    env::set_var(var, value);

    let result = Config::from_env();

    assert!(result.is_err());
    clear_env();
}

#[test]
#[serial]
fn test_zero_timeout_error() {
    clear_env();
    env::set_var("COURSEMGR_HTTP_TIMEOUT_SECS", "0");

    assert!(matches!(Config::from_env(), Err(ConfigError::ZeroTimeout)));

    clear_env();
}

#[test]
#[serial]
fn test_client_uses_configured_url() {
    clear_env();
    env::set_var("COURSEMGR_API_URL", "http://127.0.0.1:9999/");

    let client = Config::from_env().unwrap().client().unwrap();

    assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    clear_env();
}

#[tokio::test]
#[serial]
async fn test_session_survives_through_configured_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.toml");
    env::set_var("COURSEMGR_SESSION_FILE", &path);

    let config = Config::from_env().unwrap();
    let user = MaskedUser {
        id: 4,
        firstname: "Grace".to_string(),
        surname: "Hopper".to_string(),
        age: Some(40),
        email: "grace@example.com".to_string(),
        is_organizer: true,
        active: Some(true),
    };
    config.session_store().save(&user).await.unwrap();

    let ctx = AuthContext::restore(Arc::new(config.session_store())).await;

    assert!(path.exists());
    assert_eq!(ctx.user(), Some(&user));
    clear_env();
}
