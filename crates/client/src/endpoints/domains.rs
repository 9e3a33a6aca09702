//! Domain endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::{RequestAuth, not_found_as, read_json};
use crate::endpoints::{encode_path_segment, send_request_with_retry};
use crate::error::Result;
use crate::models::Domain;

/// List all domains, including their Keycloak status.
pub async fn list_domains(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    max_retries: usize,
) -> Result<Vec<Domain>> {
    debug!("Listing domains");
    let url = format!("{}/rest/domains/all", base_url);
    let builder = auth.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries).await?;
    read_json(response, "domain list").await
}

/// Create a new domain.
pub async fn create_domain(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    domain: &Domain,
    max_retries: usize,
) -> Result<Domain> {
    debug!("Creating domain: {:?}", domain.client_id);
    let url = format!("{}/rest/domains/domain/", base_url);
    let builder = auth.apply(client.post(&url)).json(domain);
    let response = send_request_with_retry(builder, max_retries).await?;
    read_json(response, "created domain").await
}

/// Update an existing domain.
pub async fn update_domain(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    client_id: &str,
    domain: &Domain,
    max_retries: usize,
) -> Result<Domain> {
    debug!("Updating domain: {}", client_id);
    let url = format!(
        "{}/rest/domains/domain/{}",
        base_url,
        encode_path_segment(client_id)
    );
    let builder = auth.apply(client.put(&url)).json(domain);
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Domain '{}' not found", client_id)))?;
    read_json(response, "updated domain").await
}

/// Delete a domain.
pub async fn delete_domain(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    client_id: &str,
    max_retries: usize,
) -> Result<()> {
    debug!("Deleting domain: {}", client_id);
    let url = format!(
        "{}/rest/domains/domain/{}",
        base_url,
        encode_path_segment(client_id)
    );
    let builder = auth.apply(client.delete(&url));
    send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Domain '{}' not found", client_id)))?;
    Ok(())
}

/// Create the Keycloak client backing a domain.
pub async fn create_domain_in_keycloak(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    domain: &Domain,
    max_retries: usize,
) -> Result<()> {
    debug!("Creating domain in Keycloak: {:?}", domain.client_id);
    let url = format!("{}/rest/domains/keycloak", base_url);
    let builder = auth.apply(client.post(&url)).json(domain);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}
