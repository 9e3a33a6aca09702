//! Chart endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::{RequestAuth, not_found_as, read_json};
use crate::endpoints::{encode_path_segment, send_request_with_retry};
use crate::error::Result;
use crate::models::Chart;

/// List all charts.
pub async fn list_charts(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    max_retries: usize,
) -> Result<Vec<Chart>> {
    debug!("Listing charts");
    let url = format!("{}/rest/charts/all", base_url);
    let builder = auth.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries).await?;
    read_json(response, "chart list").await
}

/// Get a chart by chart number.
pub async fn get_chart(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    chart_number: &str,
    max_retries: usize,
) -> Result<Chart> {
    debug!("Getting chart: {}", chart_number);
    let url = format!(
        "{}/rest/charts/chart/{}",
        base_url,
        encode_path_segment(chart_number)
    );
    let builder = auth.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Chart '{}' not found", chart_number)))?;
    read_json(response, "chart").await
}

/// Create a new chart.
pub async fn create_chart(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    chart: &Chart,
    max_retries: usize,
) -> Result<Chart> {
    debug!("Creating chart: {:?}", chart.chart_number);
    let url = format!("{}/rest/charts/chart/", base_url);
    let builder = auth.apply(client.post(&url)).json(chart);
    let response = send_request_with_retry(builder, max_retries).await?;
    read_json(response, "created chart").await
}

/// Update an existing chart.
pub async fn update_chart(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    chart_number: &str,
    chart: &Chart,
    max_retries: usize,
) -> Result<Chart> {
    debug!("Updating chart: {}", chart_number);
    let url = format!(
        "{}/rest/charts/chart/{}",
        base_url,
        encode_path_segment(chart_number)
    );
    let builder = auth.apply(client.put(&url)).json(chart);
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Chart '{}' not found", chart_number)))?;
    read_json(response, "updated chart").await
}

/// Delete a chart.
pub async fn delete_chart(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    chart_number: &str,
    max_retries: usize,
) -> Result<()> {
    debug!("Deleting chart: {}", chart_number);
    let url = format!(
        "{}/rest/charts/chart/{}",
        base_url,
        encode_path_segment(chart_number)
    );
    let builder = auth.apply(client.delete(&url));
    send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("Chart '{}' not found", chart_number)))?;
    Ok(())
}
