//! Category endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::{RequestAuth, not_found_as, read_json};
use crate::endpoints::send_request_with_retry;
use crate::error::Result;
use crate::models::Category;

/// Get a category by id.
pub async fn get_category(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    id: i64,
    max_retries: usize,
) -> Result<Category> {
    debug!("Getting category: {}", id);
    let url = format!("{}/rest/categories/category/{}", base_url, id);
    let builder = auth.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Category {} not found", id)))?;
    read_json(response, "category").await
}
