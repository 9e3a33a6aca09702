//! Environment variable tests for the configuration loader builder.

use std::time::Duration;

use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use serial_test::serial;

use super::env_lock;

#[test]
#[serial]
fn test_env_values_applied() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("NIORD_BASE_URL", Some("http://niord.example.com:8080")),
            ("NIORD_ACCESS_TOKEN", Some("env-token")),
            ("NIORD_DOMAIN", Some("niord-client-fe")),
            ("NIORD_TIMEOUT", Some("12")),
            ("NIORD_LANGUAGES", Some("EN, da ,")),
            ("NIORD_DETAIL_POLL_SECS", Some("7")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.base_url, "http://niord.example.com:8080");
            assert_eq!(
                config.auth.access_token.unwrap().expose_secret(),
                "env-token"
            );
            assert_eq!(config.connection.domain.as_deref(), Some("niord-client-fe"));
            assert_eq!(config.connection.timeout, Duration::from_secs(12));
            assert_eq!(config.view.languages, vec!["en", "da"]);
            assert_eq!(config.view.detail_poll_interval, Duration::from_secs(7));
            assert_eq!(config.view.status_poll_interval, Duration::from_secs(10));
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [("NIORD_BASE_URL", Some("http://from-env:8080"))],
        || {
            let config = ConfigLoader::new()
                .with_base_url("http://from-cli:8080".to_string())
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.connection.base_url, "http://from-cli:8080");
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("NIORD_BASE_URL", Some("http://localhost:8080")),
            ("NIORD_ACCESS_TOKEN", Some("   ")),
            ("NIORD_DOMAIN", Some("")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert!(config.auth.access_token.is_none());
            assert!(config.connection.domain.is_none());
        },
    );
}

#[test]
#[serial]
fn test_invalid_numeric_env_var() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("NIORD_TIMEOUT", Some("soon"))], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "NIORD_TIMEOUT"),
            _ => panic!("expected InvalidValue for NIORD_TIMEOUT"),
        }
    });
}

#[test]
#[serial]
fn test_env_max_retries_bound() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("NIORD_MAX_RETRIES", Some("99"))], || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(result, Err(ConfigError::InvalidMaxRetries { .. })));
    });
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("NIORD_TEST_TRIM", Some("  value  "), || {
        assert_eq!(env_var_or_none("NIORD_TEST_TRIM").as_deref(), Some("value"));
    });
    temp_env::with_var("NIORD_TEST_TRIM", None::<&str>, || {
        assert!(env_var_or_none("NIORD_TEST_TRIM").is_none());
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("DOTENV_DISABLED", Some("1"), || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}
