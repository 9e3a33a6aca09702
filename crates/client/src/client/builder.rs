//! Client builder for constructing [`NiordClient`] instances.
//!
//! Responsibilities:
//! - Fluent configuration of the server URL, credentials and transport.
//! - Normalizing the base URL (removing trailing slashes).
//! - Configuring the underlying HTTP client (timeouts, TLS verification, redirects).
//!
//! Does NOT handle:
//! - Actual API calls (see the resource submodules of [`crate::client`]).
//! - Obtaining Keycloak tokens; the access token is supplied by the caller.
//!
//! Invariants:
//! - `base_url` is required and is always stored without a trailing slash.
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning.

use std::time::Duration;

use secrecy::SecretString;

use crate::client::NiordClient;
use crate::endpoints::RequestAuth;
use crate::error::{ClientError, Result};
use niord_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`NiordClient`].
///
/// ```rust,ignore
/// use niord_client::NiordClient;
///
/// let client = NiordClient::builder()
///     .base_url("http://localhost:8080".to_string())
///     .domain("niord-client-nw".to_string())
///     .build()?;
/// ```
pub struct NiordClientBuilder {
    base_url: Option<String>,
    access_token: Option<SecretString>,
    domain: Option<String>,
    auth_server_url: Option<String>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
}

impl Default for NiordClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            access_token: None,
            domain: None,
            auth_server_url: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl NiordClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Niord server, e.g. `http://localhost:8080`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the Keycloak bearer token sent with every request.
    pub fn access_token(mut self, token: SecretString) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Set the Niord domain the client operates on.
    pub fn domain(mut self, domain: String) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Set the Keycloak server URL. Defaults to `<base_url>/auth`.
    pub fn auth_server_url(mut self, url: String) -> Self {
        self.auth_server_url = Some(url);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against development servers with self-signed certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for transient failures.
    ///
    /// Default is 3 retries with exponential backoff (1s, 2s, 4s delays).
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.access_token = config.auth.access_token.clone();
        self.domain = config.connection.domain.clone();
        self.auth_server_url = Some(config.auth_server_url());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`NiordClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or is empty.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<NiordClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is empty".to_string()));
        }

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;
        let auth_server_url = self
            .auth_server_url
            .map(Self::normalize_base_url)
            .unwrap_or_else(|| format!("{}/auth", base_url));

        Ok(NiordClient {
            http,
            base_url,
            auth_server_url,
            auth: RequestAuth::new(self.access_token, self.domain),
            max_retries: self.max_retries,
        })
    }
}
