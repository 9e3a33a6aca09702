//! Main Niord REST API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `charts`, `domains`, `templates`, `batch`: resource methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token acquisition; the bearer token is fixed at build time
//!
//! # Invariants
//! - Every request carries the configured bearer token and domain header
//! - `base_url` never ends with a slash

pub mod builder;

mod batch;
mod charts;
mod domains;
mod templates;

use crate::endpoints::RequestAuth;

/// Niord REST API client.
///
/// Cheap to share behind an `Arc`; the underlying `reqwest::Client` pools
/// connections.
#[derive(Debug)]
pub struct NiordClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth_server_url: String,
    pub(crate) auth: RequestAuth,
    pub(crate) max_retries: usize,
}

impl NiordClient {
    /// Create a new client builder.
    pub fn builder() -> builder::NiordClientBuilder {
        builder::NiordClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the Keycloak server URL.
    pub fn auth_server_url(&self) -> &str {
        &self.auth_server_url
    }

    /// The Niord domain requests are scoped to, if any.
    pub fn domain(&self) -> Option<&str> {
        self.auth.domain.as_deref()
    }

    /// Whether a bearer token is configured.
    pub fn has_access_token(&self) -> bool {
        self.auth.token.is_some()
    }
}
