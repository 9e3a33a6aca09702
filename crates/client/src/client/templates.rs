//! Template, category and ticket API methods for [`NiordClient`].

use serde_json::Value;

use crate::client::NiordClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Category, PagedSearchResult, Template, TemplateSearchParams};

impl NiordClient {
    /// Search templates. `page` is zero-based.
    pub async fn search_templates(
        &self,
        params: &TemplateSearchParams,
        page: usize,
        max_size: usize,
    ) -> Result<PagedSearchResult<Template>> {
        endpoints::search_templates(
            &self.http,
            &self.base_url,
            &self.auth,
            params,
            page,
            max_size,
            self.max_retries,
        )
        .await
    }

    /// Get a template by id.
    pub async fn get_template(&self, id: i64) -> Result<Template> {
        endpoints::get_template(&self.http, &self.base_url, &self.auth, id, self.max_retries)
            .await
    }

    /// Create a template.
    pub async fn create_template(&self, template: &Template) -> Result<Template> {
        endpoints::create_template(
            &self.http,
            &self.base_url,
            &self.auth,
            template,
            self.max_retries,
        )
        .await
    }

    /// Update the template with the given id.
    pub async fn update_template(&self, id: i64, template: &Template) -> Result<Template> {
        endpoints::update_template(
            &self.http,
            &self.base_url,
            &self.auth,
            id,
            template,
            self.max_retries,
        )
        .await
    }

    /// Delete a template.
    pub async fn delete_template(&self, id: i64) -> Result<()> {
        endpoints::delete_template(&self.http, &self.base_url, &self.auth, id, self.max_retries)
            .await
    }

    /// Execute a template against a message and return the resulting message.
    pub async fn execute_template(&self, template: &Template, message_id: &str) -> Result<Value> {
        endpoints::execute_template(
            &self.http,
            &self.base_url,
            &self.auth,
            template,
            message_id,
            self.max_retries,
        )
        .await
    }

    /// Upload a JSON file of templates and return the server's report.
    pub async fn upload_templates(&self, file_name: &str, content: Vec<u8>) -> Result<String> {
        endpoints::upload_templates(
            &self.http,
            &self.base_url,
            &self.auth,
            file_name,
            content,
            self.max_retries,
        )
        .await
    }

    /// Get a category by id.
    pub async fn get_category(&self, id: i64) -> Result<Category> {
        endpoints::get_category(&self.http, &self.base_url, &self.auth, id, self.max_retries)
            .await
    }

    /// Request a one-time download ticket for `role`.
    pub async fn get_ticket(&self, role: &str) -> Result<String> {
        endpoints::get_ticket(&self.http, &self.base_url, &self.auth, role, self.max_retries)
            .await
    }

    /// Build the template export download URL, fetching a fresh admin ticket.
    pub async fn templates_export_url(&self) -> Result<String> {
        let ticket = self.get_ticket("admin").await?;
        Ok(endpoints::templates_export_url(&self.base_url, &ticket))
    }
}
