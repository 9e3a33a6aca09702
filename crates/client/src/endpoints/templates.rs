//! Message template endpoints.

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::debug;

use crate::endpoints::request::{RequestAuth, not_found_as, read_json};
use crate::endpoints::send_request_with_retry;
use crate::endpoints::url_encoding::encode_query_value;
use crate::error::Result;
use crate::models::{PagedSearchResult, Template, TemplateSearchParams};

/// Search templates, one page at a time.
///
/// `page` is zero-based; `max_size` is the page size.
pub async fn search_templates(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    params: &TemplateSearchParams,
    page: usize,
    max_size: usize,
    max_retries: usize,
) -> Result<PagedSearchResult<Template>> {
    debug!(
        name = %params.name,
        category = ?params.category,
        domain = ?params.domain,
        page,
        max_size,
        "Searching templates"
    );
    let url = format!("{}/rest/templates/search", base_url);
    let query: Vec<(&str, String)> = vec![
        ("name", params.name.clone()),
        (
            "category",
            params.category.map(|c| c.to_string()).unwrap_or_default(),
        ),
        ("domain", params.domain.clone().unwrap_or_default()),
        ("page", page.to_string()),
        ("maxSize", max_size.to_string()),
    ];
    let builder = auth.apply(client.get(&url)).query(&query);
    let response = send_request_with_retry(builder, max_retries).await?;
    read_json(response, "template search result").await
}

/// Get a template by id.
pub async fn get_template(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    id: i64,
    max_retries: usize,
) -> Result<Template> {
    debug!("Getting template: {}", id);
    let url = format!("{}/rest/templates/template/{}", base_url, id);
    let builder = auth.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Template {} not found", id)))?;
    read_json(response, "template").await
}

/// Create a new template.
pub async fn create_template(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    template: &Template,
    max_retries: usize,
) -> Result<Template> {
    debug!("Creating template");
    let url = format!("{}/rest/templates/template/", base_url);
    let builder = auth.apply(client.post(&url)).json(template);
    let response = send_request_with_retry(builder, max_retries).await?;
    read_json(response, "created template").await
}

/// Update an existing template.
pub async fn update_template(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    id: i64,
    template: &Template,
    max_retries: usize,
) -> Result<Template> {
    debug!("Updating template: {}", id);
    let url = format!("{}/rest/templates/template/{}", base_url, id);
    let builder = auth.apply(client.put(&url)).json(template);
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Template {} not found", id)))?;
    read_json(response, "updated template").await
}

/// Delete a template.
pub async fn delete_template(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    id: i64,
    max_retries: usize,
) -> Result<()> {
    debug!("Deleting template: {}", id);
    let url = format!("{}/rest/templates/template/{}", base_url, id);
    let builder = auth.apply(client.delete(&url));
    send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Template {} not found", id)))?;
    Ok(())
}

/// Run a template against an existing message and return the resulting
/// message unchanged from the server's JSON.
pub async fn execute_template(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    template: &Template,
    message_id: &str,
    max_retries: usize,
) -> Result<Value> {
    debug!("Executing template {:?} on message {}", template.id, message_id);
    let url = format!(
        "{}/rest/templates/execute/{}",
        base_url,
        crate::endpoints::encode_path_segment(message_id)
    );
    let builder = auth.apply(client.post(&url)).json(template);
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Message '{}' not found", message_id)))?;
    read_json(response, "template result").await
}

/// Upload a JSON file of message templates.
///
/// The multipart body cannot be cloned, so the request is attempted once
/// regardless of `max_retries`. Returns the server's plain-text report.
pub async fn upload_templates(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    file_name: &str,
    content: Vec<u8>,
    max_retries: usize,
) -> Result<String> {
    debug!(file_name, bytes = content.len(), "Uploading templates");
    let url = format!("{}/rest/templates/upload-templates", base_url);
    let part = Part::bytes(content)
        .file_name(file_name.to_string())
        .mime_str("application/json")?;
    let form = Form::new().part("file", part);
    let builder = auth.apply(client.post(&url)).multipart(form);
    let response = send_request_with_retry(builder, max_retries).await?;
    Ok(response.text().await?)
}

/// The download URL of the full template export for a one-time ticket.
pub fn templates_export_url(base_url: &str, ticket: &str) -> String {
    format!(
        "{}/rest/templates/all?ticket={}",
        base_url,
        encode_query_value(ticket)
    )
}
