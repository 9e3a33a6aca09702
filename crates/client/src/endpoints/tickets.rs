//! One-time ticket endpoint.
//!
//! Tickets authorize plain browser downloads (exports, batch data files)
//! where no bearer header can be attached.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::RequestAuth;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};

/// Request a one-time ticket for the given role.
pub async fn get_ticket(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    role: &str,
    max_retries: usize,
) -> Result<String> {
    debug!("Requesting ticket for role: {}", role);
    let url = format!("{}/rest/tickets/ticket", base_url);
    let builder = auth.apply(client.get(&url)).query(&[("role", role)]);
    let response = send_request_with_retry(builder, max_retries).await?;
    let ticket = response.text().await?.trim().to_string();
    if ticket.is_empty() {
        return Err(ClientError::InvalidResponse(
            "Server returned an empty ticket".to_string(),
        ));
    }
    Ok(ticket)
}
