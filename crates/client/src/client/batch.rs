//! Batch job API methods for [`NiordClient`].

use crate::client::NiordClient;
use crate::endpoints::{self, ExecutionAction};
use crate::error::Result;
use crate::models::{BatchInstance, BatchStatus, PagedSearchResult};

impl NiordClient {
    /// Get the batch status summary.
    pub async fn get_batch_status(&self) -> Result<BatchStatus> {
        endpoints::get_batch_status(&self.http, &self.base_url, &self.auth, self.max_retries).await
    }

    /// List instances of a batch job type. `page` is zero-based.
    pub async fn list_batch_instances(
        &self,
        job_name: &str,
        page: usize,
        page_size: usize,
    ) -> Result<PagedSearchResult<BatchInstance>> {
        endpoints::list_batch_instances(
            &self.http,
            &self.base_url,
            &self.auth,
            job_name,
            page,
            page_size,
            self.max_retries,
        )
        .await
    }

    /// Stop, restart or abandon a batch execution.
    pub async fn control_execution(&self, execution_id: i64, action: ExecutionAction) -> Result<()> {
        endpoints::control_execution(
            &self.http,
            &self.base_url,
            &self.auth,
            execution_id,
            action,
            self.max_retries,
        )
        .await
    }

    /// List the log files of a batch instance.
    pub async fn list_batch_log_files(&self, instance_id: i64) -> Result<Vec<String>> {
        endpoints::list_log_files(
            &self.http,
            &self.base_url,
            &self.auth,
            instance_id,
            self.max_retries,
        )
        .await
    }

    /// Fetch the content of a batch log file.
    pub async fn get_batch_log_file(&self, instance_id: i64, file_name: &str) -> Result<String> {
        endpoints::get_log_file(
            &self.http,
            &self.base_url,
            &self.auth,
            instance_id,
            file_name,
            self.max_retries,
        )
        .await
    }

    /// Build the data file download URL of a batch instance, fetching a
    /// fresh admin ticket.
    pub async fn batch_download_url(&self, instance_id: i64, file_name: &str) -> Result<String> {
        let ticket = self.get_ticket("admin").await?;
        Ok(endpoints::batch_download_url(
            &self.base_url,
            instance_id,
            file_name,
            &ticket,
        ))
    }
}
