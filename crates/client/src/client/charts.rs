//! Chart API methods for [`NiordClient`].

use crate::client::NiordClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Chart;

impl NiordClient {
    /// List all charts.
    pub async fn list_charts(&self) -> Result<Vec<Chart>> {
        endpoints::list_charts(&self.http, &self.base_url, &self.auth, self.max_retries).await
    }

    /// Get a chart by chart number.
    pub async fn get_chart(&self, chart_number: &str) -> Result<Chart> {
        endpoints::get_chart(
            &self.http,
            &self.base_url,
            &self.auth,
            chart_number,
            self.max_retries,
        )
        .await
    }

    /// Create a chart.
    pub async fn create_chart(&self, chart: &Chart) -> Result<Chart> {
        endpoints::create_chart(&self.http, &self.base_url, &self.auth, chart, self.max_retries)
            .await
    }

    /// Update the chart with the given chart number.
    pub async fn update_chart(&self, chart_number: &str, chart: &Chart) -> Result<Chart> {
        endpoints::update_chart(
            &self.http,
            &self.base_url,
            &self.auth,
            chart_number,
            chart,
            self.max_retries,
        )
        .await
    }

    /// Delete a chart.
    pub async fn delete_chart(&self, chart_number: &str) -> Result<()> {
        endpoints::delete_chart(
            &self.http,
            &self.base_url,
            &self.auth,
            chart_number,
            self.max_retries,
        )
        .await
    }
}
