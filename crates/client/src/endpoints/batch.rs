//! Batch job endpoints.

use std::fmt;

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::{RequestAuth, not_found_as, read_json};
use crate::endpoints::url_encoding::encode_query_value;
use crate::endpoints::{encode_path_segment, send_request_with_retry};
use crate::error::Result;
use crate::models::{BatchInstance, BatchStatus, PagedSearchResult};

/// Control operations on a batch execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionAction {
    Stop,
    Restart,
    Abandon,
}

impl ExecutionAction {
    /// The trailing path segment of the action endpoint.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Abandon => "abandon",
        }
    }
}

impl fmt::Display for ExecutionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Get the batch status summary.
pub async fn get_batch_status(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    max_retries: usize,
) -> Result<BatchStatus> {
    debug!("Getting batch status");
    let url = format!("{}/rest/batch/status", base_url);
    let builder = auth.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries).await?;
    read_json(response, "batch status").await
}

/// List the instances of a batch job type, most recent first.
///
/// `page` is zero-based.
pub async fn list_batch_instances(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    job_name: &str,
    page: usize,
    page_size: usize,
    max_retries: usize,
) -> Result<PagedSearchResult<BatchInstance>> {
    debug!(job_name, page, page_size, "Listing batch instances");
    let url = format!(
        "{}/rest/batch/{}/instances",
        base_url,
        encode_path_segment(job_name)
    );
    let builder = auth.apply(client.get(&url)).query(&[
        ("page", page.to_string()),
        ("pageSize", page_size.to_string()),
    ]);
    let response = send_request_with_retry(builder, max_retries).await?;
    read_json(response, "batch instances").await
}

/// Stop, restart or abandon a batch execution.
pub async fn control_execution(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    execution_id: i64,
    action: ExecutionAction,
    max_retries: usize,
) -> Result<()> {
    debug!(execution_id, %action, "Controlling batch execution");
    let url = format!(
        "{}/rest/batch/execution/{}/{}",
        base_url,
        execution_id,
        action.as_path()
    );
    let builder = auth.apply(client.put(&url));
    send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Execution {} not found", execution_id)))?;
    Ok(())
}

/// List the log file names of a batch instance.
pub async fn list_log_files(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    instance_id: i64,
    max_retries: usize,
) -> Result<Vec<String>> {
    debug!(instance_id, "Listing batch log files");
    let url = format!("{}/rest/batch/instance/{}/logs", base_url, instance_id);
    let builder = auth.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Instance {} not found", instance_id)))?;
    read_json(response, "log file list").await
}

/// Fetch the text content of one log file.
pub async fn get_log_file(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    instance_id: i64,
    file_name: &str,
    max_retries: usize,
) -> Result<String> {
    debug!(instance_id, file_name, "Fetching batch log file");
    let url = format!(
        "{}/rest/batch/instance/{}/logs/{}",
        base_url,
        instance_id,
        encode_path_segment(file_name)
    );
    let builder = auth.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Log file '{}' not found", file_name)))?;
    Ok(response.text().await?)
}

/// The download URL of a batch instance's data file for a one-time ticket.
pub fn batch_download_url(base_url: &str, instance_id: i64, file_name: &str, ticket: &str) -> String {
    format!(
        "{}/rest/batch/instance/{}/download/{}?ticket={}",
        base_url,
        instance_id,
        encode_path_segment(file_name),
        encode_query_value(ticket)
    )
}
