//! Request helpers shared by all endpoint functions.
//!
//! Responsibilities:
//! - Attach the bearer token and `NiordDomain` header to outgoing requests.
//! - Retry transient failures (429, 502, 503, 504) with exponential backoff.
//! - Map non-success responses to [`ClientError`].
//!
//! Invariants:
//! - Backoff doubles per attempt starting at one second (1s, 2s, 4s...).
//! - `max_retries == 0` means a single attempt.
//! - 401 and 403 become [`ClientError::Unauthorized`], everything else
//!   non-successful becomes [`ClientError::ApiError`].

use reqwest::{RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::{ClientError, Result};
use niord_config::constants::DOMAIN_HEADER;

/// Credentials and domain selection applied to every request.
#[derive(Debug, Clone, Default)]
pub struct RequestAuth {
    /// Keycloak bearer token.
    pub token: Option<SecretString>,
    /// Niord domain the request operates on.
    pub domain: Option<String>,
}

impl RequestAuth {
    pub fn new(token: Option<SecretString>, domain: Option<String>) -> Self {
        Self { token, domain }
    }

    /// Adds the `Authorization` and domain headers when configured.
    pub fn apply(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.token {
            builder = builder.header(
                "Authorization",
                format!("Bearer {}", token.expose_secret()),
            );
        }
        if let Some(domain) = &self.domain {
            builder = builder.header(DOMAIN_HEADER, domain);
        }
        builder
    }
}

/// Sends an HTTP request, retrying transient failures with exponential backoff.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when every attempt hit a
/// retryable status, `ClientError::Unauthorized` on 401/403 and
/// `ClientError::ApiError` on any other non-success status.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                if attempt == 0 {
                    debug!("Request builder cannot be cloned, single attempt only");
                    let response = builder.send().await?;
                    return check_status(response).await;
                }
                debug!("Cannot clone request builder for retry");
                return Err(ClientError::MaxRetriesExceeded(attempt));
            }
        };

        let response = attempt_builder.send().await?;
        let status = response.status().as_u16();

        if !ClientError::is_retryable_status(status) {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return check_status(response).await;
        }

        if attempt < max_retries {
            let backoff_secs = 2u64.pow(attempt as u32);
            debug!(
                status,
                attempt = attempt + 1,
                max_retries = max_retries + 1,
                backoff_secs,
                "Transient failure, retrying with exponential backoff"
            );
            tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
        } else if max_retries == 0 {
            return check_status(response).await;
        } else {
            debug!(attempts = attempt + 1, "Max retries exhausted");
        }
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    if matches!(status, 401 | 403) {
        let message = if message.trim().is_empty() {
            format!("HTTP {} from {}", status, url)
        } else {
            message
        };
        return Err(ClientError::Unauthorized(message));
    }

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}

/// Maps a 404 from a single-resource request to `ClientError::NotFound`.
pub(crate) fn not_found_as(err: ClientError, what: impl FnOnce() -> String) -> ClientError {
    match err {
        ClientError::ApiError { status: 404, .. } => ClientError::NotFound(what()),
        other => other,
    }
}

/// Decodes a JSON response body, reporting the target type on failure.
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}
