//! Integration tests for configuration loading through the public API.
//!
//! These tests verify the loader chain used by the CLI: builder overrides,
//! then `NIORD_*` environment variables, then defaults.

use niord_config::{Config, ConfigError, ConfigLoader, ViewConfig, env_var_or_none};
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

/// Builder values win over environment values; unset values fall back to defaults.
#[test]
#[serial]
fn test_config_loader_cli_overrides() {
    temp_env::with_vars(
        [
            ("NIORD_BASE_URL", Some("http://env-host:8080")),
            ("NIORD_ACCESS_TOKEN", Some("env-token")),
            ("NIORD_MAX_RETRIES", Some("2")),
            ("NIORD_TIMEOUT", None),
        ],
        || {
            let config = ConfigLoader::new()
                .with_base_url("http://cli-host:8080".to_string())
                .with_max_retries(5)
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "http://cli-host:8080");
            assert_eq!(config.connection.max_retries, 5);
            assert_eq!(config.connection.timeout, Duration::from_secs(30));
            assert_eq!(
                config.auth.access_token.as_ref().unwrap().expose_secret(),
                "env-token"
            );
        },
    );
}

#[test]
#[serial]
fn test_blank_env_values_are_unset() {
    temp_env::with_vars(
        [
            ("NIORD_BASE_URL", Some("   ")),
            ("NIORD_DOMAIN", Some("")),
        ],
        || {
            assert!(env_var_or_none("NIORD_BASE_URL").is_none());
            let result = ConfigLoader::new().from_env().unwrap().build();
            assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}

#[test]
fn test_view_defaults() {
    let view = ViewConfig::default();
    assert_eq!(view.chart_page_size, 10);
    assert_eq!(view.template_page_size, 10);
    assert_eq!(view.batch_page_size, 5);
    assert_eq!(view.status_poll_interval, Duration::from_secs(10));
    assert_eq!(view.detail_poll_interval, Duration::from_secs(3));
}

#[test]
fn test_config_json_round_trip_keeps_view() {
    let mut config = Config::with_base_url("http://niord.example.com");
    config.view.languages = vec!["en".to_string(), "fo".to_string()];

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.connection.base_url, "http://niord.example.com");
    assert_eq!(parsed.view.languages, vec!["en", "fo"]);
    assert!(parsed.auth.access_token.is_none());
}
