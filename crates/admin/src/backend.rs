//! Backend traits consumed by the view models.
//!
//! Responsibilities:
//! - Describe the server operations each view model needs.
//! - Implement them for [`NiordClient`].
//!
//! Does NOT handle:
//! - Retries, headers or encoding (see `niord_client::endpoints`).
//!
//! Invariants:
//! - Every returned future is `Send` so pollers can run on spawned tasks.

use std::future::Future;

use niord_client::{
    BatchInstance, BatchStatus, Category, Chart, ClientError, Domain, ExecutionAction,
    NiordClient, PagedSearchResult, Template, TemplateSearchParams,
};
use serde_json::Value;

use crate::entity::AdminEntity;

type ClientResult<T> = std::result::Result<T, ClientError>;

/// Create, read, update and delete for one entity type.
pub trait CrudBackend<E: AdminEntity>: Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = ClientResult<Vec<E>>> + Send;

    fn create(&self, entity: &E) -> impl Future<Output = ClientResult<E>> + Send;

    fn update(&self, id: &E::Id, entity: &E) -> impl Future<Output = ClientResult<E>> + Send;

    fn delete(&self, id: &E::Id) -> impl Future<Output = ClientResult<()>> + Send;
}

/// Domain operations beyond plain CRUD.
pub trait DomainBackend: CrudBackend<Domain> {
    /// Base URL of the Keycloak server.
    fn auth_server_url(&self) -> String;

    fn create_in_keycloak(&self, domain: &Domain) -> impl Future<Output = ClientResult<()>> + Send;
}

/// Message template operations.
pub trait TemplateBackend: Send + Sync + 'static {
    fn search(
        &self,
        params: &TemplateSearchParams,
        page: usize,
        max_size: usize,
    ) -> impl Future<Output = ClientResult<PagedSearchResult<Template>>> + Send;

    fn get(&self, id: i64) -> impl Future<Output = ClientResult<Template>> + Send;

    fn create(&self, template: &Template) -> impl Future<Output = ClientResult<Template>> + Send;

    fn update(
        &self,
        id: i64,
        template: &Template,
    ) -> impl Future<Output = ClientResult<Template>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = ClientResult<()>> + Send;

    fn get_category(&self, id: i64) -> impl Future<Output = ClientResult<Category>> + Send;

    fn execute(
        &self,
        template: &Template,
        message_id: &str,
    ) -> impl Future<Output = ClientResult<Value>> + Send;

    /// Download URL of the full template export.
    fn export_url(&self) -> impl Future<Output = ClientResult<String>> + Send;

    /// Imports a JSON file of templates, returning the server's report.
    fn upload(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> impl Future<Output = ClientResult<String>> + Send;
}

/// Batch job operations.
pub trait BatchBackend: Send + Sync + 'static {
    fn status(&self) -> impl Future<Output = ClientResult<BatchStatus>> + Send;

    fn instances(
        &self,
        job_name: &str,
        page: usize,
        page_size: usize,
    ) -> impl Future<Output = ClientResult<PagedSearchResult<BatchInstance>>> + Send;

    fn control(
        &self,
        execution_id: i64,
        action: ExecutionAction,
    ) -> impl Future<Output = ClientResult<()>> + Send;

    fn log_files(&self, instance_id: i64) -> impl Future<Output = ClientResult<Vec<String>>> + Send;

    fn log_file(
        &self,
        instance_id: i64,
        file_name: &str,
    ) -> impl Future<Output = ClientResult<String>> + Send;

    fn download_url(
        &self,
        instance_id: i64,
        file_name: &str,
    ) -> impl Future<Output = ClientResult<String>> + Send;
}

impl CrudBackend<Chart> for NiordClient {
    fn list(&self) -> impl Future<Output = ClientResult<Vec<Chart>>> + Send {
        self.list_charts()
    }

    fn create(&self, entity: &Chart) -> impl Future<Output = ClientResult<Chart>> + Send {
        self.create_chart(entity)
    }

    fn update(&self, id: &String, entity: &Chart) -> impl Future<Output = ClientResult<Chart>> + Send {
        self.update_chart(id, entity)
    }

    fn delete(&self, id: &String) -> impl Future<Output = ClientResult<()>> + Send {
        self.delete_chart(id)
    }
}

impl CrudBackend<Domain> for NiordClient {
    fn list(&self) -> impl Future<Output = ClientResult<Vec<Domain>>> + Send {
        self.list_domains()
    }

    fn create(&self, entity: &Domain) -> impl Future<Output = ClientResult<Domain>> + Send {
        self.create_domain(entity)
    }

    fn update(
        &self,
        id: &String,
        entity: &Domain,
    ) -> impl Future<Output = ClientResult<Domain>> + Send {
        self.update_domain(id, entity)
    }

    fn delete(&self, id: &String) -> impl Future<Output = ClientResult<()>> + Send {
        self.delete_domain(id)
    }
}

impl DomainBackend for NiordClient {
    fn auth_server_url(&self) -> String {
        NiordClient::auth_server_url(self).to_string()
    }

    fn create_in_keycloak(&self, domain: &Domain) -> impl Future<Output = ClientResult<()>> + Send {
        self.create_domain_in_keycloak(domain)
    }
}

impl TemplateBackend for NiordClient {
    fn search(
        &self,
        params: &TemplateSearchParams,
        page: usize,
        max_size: usize,
    ) -> impl Future<Output = ClientResult<PagedSearchResult<Template>>> + Send {
        self.search_templates(params, page, max_size)
    }

    fn get(&self, id: i64) -> impl Future<Output = ClientResult<Template>> + Send {
        self.get_template(id)
    }

    fn create(&self, template: &Template) -> impl Future<Output = ClientResult<Template>> + Send {
        self.create_template(template)
    }

    fn update(
        &self,
        id: i64,
        template: &Template,
    ) -> impl Future<Output = ClientResult<Template>> + Send {
        self.update_template(id, template)
    }

    fn delete(&self, id: i64) -> impl Future<Output = ClientResult<()>> + Send {
        self.delete_template(id)
    }

    fn get_category(&self, id: i64) -> impl Future<Output = ClientResult<Category>> + Send {
        NiordClient::get_category(self, id)
    }

    fn execute(
        &self,
        template: &Template,
        message_id: &str,
    ) -> impl Future<Output = ClientResult<Value>> + Send {
        self.execute_template(template, message_id)
    }

    fn export_url(&self) -> impl Future<Output = ClientResult<String>> + Send {
        self.templates_export_url()
    }

    fn upload(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> impl Future<Output = ClientResult<String>> + Send {
        self.upload_templates(file_name, content)
    }
}

impl BatchBackend for NiordClient {
    fn status(&self) -> impl Future<Output = ClientResult<BatchStatus>> + Send {
        self.get_batch_status()
    }

    fn instances(
        &self,
        job_name: &str,
        page: usize,
        page_size: usize,
    ) -> impl Future<Output = ClientResult<PagedSearchResult<BatchInstance>>> + Send {
        self.list_batch_instances(job_name, page, page_size)
    }

    fn control(
        &self,
        execution_id: i64,
        action: ExecutionAction,
    ) -> impl Future<Output = ClientResult<()>> + Send {
        self.control_execution(execution_id, action)
    }

    fn log_files(&self, instance_id: i64) -> impl Future<Output = ClientResult<Vec<String>>> + Send {
        self.list_batch_log_files(instance_id)
    }

    fn log_file(
        &self,
        instance_id: i64,
        file_name: &str,
    ) -> impl Future<Output = ClientResult<String>> + Send {
        self.get_batch_log_file(instance_id, file_name)
    }

    fn download_url(
        &self,
        instance_id: i64,
        file_name: &str,
    ) -> impl Future<Output = ClientResult<String>> + Send {
        NiordClient::batch_download_url(self, instance_id, file_name)
    }
}
