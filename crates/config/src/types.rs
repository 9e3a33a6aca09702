//! Configuration types for the Niord admin tools.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries, domain).
//! - Define bearer-token authentication and the Keycloak server location.
//! - Define view defaults shared by the admin view models.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{
    DEFAULT_BATCH_PAGE_SIZE, DEFAULT_CHART_PAGE_SIZE, DEFAULT_DETAIL_POLL_SECS, DEFAULT_LANGUAGES,
    DEFAULT_MAX_RETRIES, DEFAULT_NIORD_PORT, DEFAULT_STATUS_POLL_SECS,
    DEFAULT_TEMPLATE_PAGE_SIZE, DEFAULT_TIMEOUT_SECS,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the Niord server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Niord server (e.g., http://localhost:8080)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for transient failures
    pub max_retries: usize,
    /// Niord domain (Keycloak client id) the requests operate on
    #[serde(default)]
    pub domain: Option<String>,
}

/// Authentication configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Keycloak bearer token sent with every request (never persisted)
    #[serde(skip)]
    pub access_token: Option<SecretString>,
    /// Base URL of the Keycloak server (e.g., http://localhost:8080/auth)
    pub auth_server_url: Option<String>,
}

/// Defaults used by the admin view models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Model languages in display order
    pub languages: Vec<String>,
    pub chart_page_size: usize,
    pub template_page_size: usize,
    pub batch_page_size: usize,
    /// Batch status summary polling interval (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub status_poll_interval: Duration,
    /// Batch instance detail polling interval (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub detail_poll_interval: Duration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            chart_page_size: DEFAULT_CHART_PAGE_SIZE,
            template_page_size: DEFAULT_TEMPLATE_PAGE_SIZE,
            batch_page_size: DEFAULT_BATCH_PAGE_SIZE,
            status_poll_interval: Duration::from_secs(DEFAULT_STATUS_POLL_SECS),
            detail_poll_interval: Duration::from_secs(DEFAULT_DETAIL_POLL_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// View defaults
    #[serde(default)]
    pub view: ViewConfig,
}

impl Default for Config {
    /// Creates a development configuration targeting `http://localhost:8080`
    /// without an access token.
    fn default() -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: format!("http://localhost:{}", DEFAULT_NIORD_PORT),
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                max_retries: DEFAULT_MAX_RETRIES,
                domain: None,
            },
            auth: AuthConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

impl Config {
    /// Creates a configuration for the given server with all other values defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.connection.base_url = base_url.into();
        config
    }

    /// The Keycloak server URL, falling back to `<base_url>/auth`.
    pub fn auth_server_url(&self) -> String {
        self.auth
            .auth_server_url
            .clone()
            .unwrap_or_else(|| format!("{}/auth", self.connection.base_url))
    }
}
