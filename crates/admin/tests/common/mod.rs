//! Common test utilities for the view-model integration tests.
//!
//! # Invariants
//! - [`FakeBackend`] keeps everything in memory and records every call in order
//! - Failure toggles affect only the calls they name
//!
//! # What this does NOT handle
//! - HTTP behaviour (see the client crate tests and `client_backend_tests.rs`)

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use niord_admin::backend::{BatchBackend, CrudBackend, DomainBackend, TemplateBackend};
use niord_admin::confirm::Confirm;
use niord_client::{
    BatchExecution, BatchInstance, BatchStatus, Category, CategoryDesc, Chart, ClientError,
    Domain, ExecutionAction, PagedSearchResult, Template, TemplateSearchParams,
};
use serde_json::{Value, json};

type ClientResult<T> = std::result::Result<T, ClientError>;

/// Mutable state behind [`FakeBackend`].
#[derive(Default)]
pub struct FakeState {
    pub charts: Vec<Chart>,
    pub domains: Vec<Domain>,
    pub templates: Vec<Template>,
    pub categories: Vec<Category>,
    pub batch_status: BatchStatus,
    pub instances: HashMap<String, Vec<BatchInstance>>,
    pub log_files: Vec<String>,
    pub log_contents: HashMap<String, String>,
    pub next_template_id: i64,
    /// Calls in order, e.g. `create_chart`, `delete_chart:101`
    pub calls: Vec<String>,
    /// Status returned by failing calls
    pub fail_status: u16,
    pub fail_lists: bool,
    pub fail_mutations: bool,
    pub fail_batch_status: bool,
}

/// In-memory backend implementing every view-model backend trait.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        let backend = Self::default();
        {
            let mut state = backend.state();
            state.fail_status = 500;
            state.next_template_id = 100;
        }
        Arc::new(backend)
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: impl Into<String>) -> MutexGuard<'_, FakeState> {
        let mut state = self.state();
        state.calls.push(call.into());
        state
    }
}

fn api_error(status: u16) -> ClientError {
    ClientError::ApiError {
        status,
        url: "http://fake".to_string(),
        message: "fake failure".to_string(),
    }
}

fn list_result(state: &FakeState) -> ClientResult<()> {
    if state.fail_lists {
        Err(api_error(state.fail_status))
    } else {
        Ok(())
    }
}

fn mutation_result(state: &FakeState) -> ClientResult<()> {
    if state.fail_mutations {
        Err(api_error(state.fail_status))
    } else {
        Ok(())
    }
}

impl CrudBackend<Chart> for FakeBackend {
    async fn list(&self) -> ClientResult<Vec<Chart>> {
        let state = self.record("list_charts");
        list_result(&state)?;
        Ok(state.charts.clone())
    }

    async fn create(&self, entity: &Chart) -> ClientResult<Chart> {
        let mut state = self.record(format!(
            "create_chart:{}",
            entity.chart_number.as_deref().unwrap_or("")
        ));
        mutation_result(&state)?;
        state.charts.push(entity.clone());
        Ok(entity.clone())
    }

    async fn update(&self, id: &String, entity: &Chart) -> ClientResult<Chart> {
        let mut state = self.record(format!("update_chart:{}", id));
        mutation_result(&state)?;
        if let Some(existing) = state
            .charts
            .iter_mut()
            .find(|c| c.chart_number.as_ref() == Some(id))
        {
            *existing = entity.clone();
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: &String) -> ClientResult<()> {
        let mut state = self.record(format!("delete_chart:{}", id));
        mutation_result(&state)?;
        state.charts.retain(|c| c.chart_number.as_ref() != Some(id));
        Ok(())
    }
}

impl CrudBackend<Domain> for FakeBackend {
    async fn list(&self) -> ClientResult<Vec<Domain>> {
        let state = self.record("list_domains");
        list_result(&state)?;
        Ok(state.domains.clone())
    }

    async fn create(&self, entity: &Domain) -> ClientResult<Domain> {
        let mut state = self.record(format!(
            "create_domain:{}",
            entity.client_id.as_deref().unwrap_or("")
        ));
        mutation_result(&state)?;
        state.domains.push(entity.clone());
        Ok(entity.clone())
    }

    async fn update(&self, id: &String, entity: &Domain) -> ClientResult<Domain> {
        let mut state = self.record(format!("update_domain:{}", id));
        mutation_result(&state)?;
        if let Some(existing) = state
            .domains
            .iter_mut()
            .find(|d| d.client_id.as_ref() == Some(id))
        {
            *existing = entity.clone();
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: &String) -> ClientResult<()> {
        let mut state = self.record(format!("delete_domain:{}", id));
        mutation_result(&state)?;
        state.domains.retain(|d| d.client_id.as_ref() != Some(id));
        Ok(())
    }
}

impl DomainBackend for FakeBackend {
    fn auth_server_url(&self) -> String {
        "http://localhost:8080/auth".to_string()
    }

    async fn create_in_keycloak(&self, domain: &Domain) -> ClientResult<()> {
        let id = domain.client_id.clone().unwrap_or_default();
        let mut state = self.record(format!("keycloak:{}", id));
        mutation_result(&state)?;
        if let Some(existing) = state
            .domains
            .iter_mut()
            .find(|d| d.client_id.as_deref() == Some(id.as_str()))
        {
            existing.in_keycloak = Some(true);
        }
        Ok(())
    }
}

impl TemplateBackend for FakeBackend {
    async fn search(
        &self,
        params: &TemplateSearchParams,
        page: usize,
        max_size: usize,
    ) -> ClientResult<PagedSearchResult<Template>> {
        let state = self.record(format!("search_templates:{}:{}", params.name, page));
        list_result(&state)?;
        let needle = params.name.to_lowercase();
        let matches: Vec<Template> = state
            .templates
            .iter()
            .filter(|t| {
                needle.is_empty()
                    || t.descs.iter().any(|d| {
                        d.name
                            .as_deref()
                            .is_some_and(|n| n.to_lowercase().contains(&needle))
                    })
            })
            .filter(|t| {
                params
                    .category
                    .is_none_or(|c| t.category.as_ref().and_then(|cat| cat.id) == Some(c))
            })
            .cloned()
            .collect();
        let total = matches.len();
        let data: Vec<Template> = matches
            .into_iter()
            .skip(page.saturating_mul(max_size))
            .take(max_size)
            .collect();
        Ok(PagedSearchResult {
            size: data.len(),
            data,
            total,
        })
    }

    async fn get(&self, id: i64) -> ClientResult<Template> {
        let state = self.record(format!("get_template:{}", id));
        state
            .templates
            .iter()
            .find(|t| t.id == Some(id))
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("Template '{}' not found", id)))
    }

    async fn create(&self, template: &Template) -> ClientResult<Template> {
        let mut state = self.record("create_template");
        mutation_result(&state)?;
        let mut saved = template.clone();
        saved.id = Some(state.next_template_id);
        state.next_template_id += 1;
        state.templates.push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, id: i64, template: &Template) -> ClientResult<Template> {
        let mut state = self.record(format!("update_template:{}", id));
        mutation_result(&state)?;
        if let Some(existing) = state.templates.iter_mut().find(|t| t.id == Some(id)) {
            *existing = template.clone();
        }
        Ok(template.clone())
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        let mut state = self.record(format!("delete_template:{}", id));
        mutation_result(&state)?;
        state.templates.retain(|t| t.id != Some(id));
        Ok(())
    }

    async fn get_category(&self, id: i64) -> ClientResult<Category> {
        let state = self.record(format!("get_category:{}", id));
        state
            .categories
            .iter()
            .find(|c| c.id == Some(id))
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("Category '{}' not found", id)))
    }

    async fn execute(&self, template: &Template, message_id: &str) -> ClientResult<Value> {
        let state = self.record(format!("execute_template:{}", message_id));
        mutation_result(&state)?;
        Ok(json!({
            "id": message_id,
            "templatePaths": template.script_resource_paths,
        }))
    }

    async fn export_url(&self) -> ClientResult<String> {
        drop(self.record("export_url"));
        Ok("http://localhost:8080/rest/templates/all?ticket=t1".to_string())
    }

    async fn upload(&self, file_name: &str, content: Vec<u8>) -> ClientResult<String> {
        let mut state = self.record(format!("upload_templates:{}", file_name));
        mutation_result(&state)?;
        let uploaded: Vec<Template> = serde_json::from_slice(&content)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        let count = uploaded.len();
        for mut template in uploaded {
            template.id = Some(state.next_template_id);
            state.next_template_id += 1;
            state.templates.push(template);
        }
        Ok(format!("Imported {} templates", count))
    }
}

impl BatchBackend for FakeBackend {
    async fn status(&self) -> ClientResult<BatchStatus> {
        let state = self.record("batch_status");
        if state.fail_batch_status {
            return Err(api_error(state.fail_status));
        }
        Ok(state.batch_status.clone())
    }

    async fn instances(
        &self,
        job_name: &str,
        page: usize,
        page_size: usize,
    ) -> ClientResult<PagedSearchResult<BatchInstance>> {
        let state = self.record(format!("batch_instances:{}:{}", job_name, page));
        list_result(&state)?;
        let all = state.instances.get(job_name).cloned().unwrap_or_default();
        let total = all.len();
        let data: Vec<BatchInstance> = all
            .into_iter()
            .skip(page.saturating_mul(page_size))
            .take(page_size)
            .collect();
        Ok(PagedSearchResult {
            size: data.len(),
            data,
            total,
        })
    }

    async fn control(&self, execution_id: i64, action: ExecutionAction) -> ClientResult<()> {
        let state = self.record(format!("control:{}:{}", execution_id, action));
        mutation_result(&state)
    }

    async fn log_files(&self, instance_id: i64) -> ClientResult<Vec<String>> {
        let state = self.record(format!("log_files:{}", instance_id));
        list_result(&state)?;
        Ok(state.log_files.clone())
    }

    async fn log_file(&self, instance_id: i64, file_name: &str) -> ClientResult<String> {
        let state = self.record(format!("log_file:{}:{}", instance_id, file_name));
        state
            .log_contents
            .get(file_name)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("Log file '{}' not found", file_name)))
    }

    async fn download_url(&self, instance_id: i64, file_name: &str) -> ClientResult<String> {
        drop(self.record(format!("download_url:{}", instance_id)));
        Ok(format!(
            "http://localhost:8080/rest/batch/instance/{}/download/{}?ticket=t1",
            instance_id, file_name
        ))
    }
}

/// Confirmation stub that answers every prompt the same way and records it.
#[derive(Default)]
pub struct ScriptedConfirm {
    pub answer: bool,
    pub prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedConfirm {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            prompts: Mutex::default(),
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirm for ScriptedConfirm {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        self.prompts
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
        self.answer
    }
}

pub fn chart(number: &str, name: &str) -> Chart {
    Chart {
        chart_number: Some(number.to_string()),
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn domain(client_id: &str, name: &str) -> Domain {
    Domain {
        client_id: Some(client_id.to_string()),
        name: Some(name.to_string()),
        active: true,
        ..Default::default()
    }
}

pub fn category(id: i64, names: &[(&str, &str)]) -> Category {
    Category {
        id: Some(id),
        descs: names
            .iter()
            .map(|(lang, name)| CategoryDesc {
                lang: lang.to_string(),
                name: Some(name.to_string()),
            })
            .collect(),
    }
}

pub fn execution(id: i64, status: &str) -> BatchExecution {
    BatchExecution {
        execution_id: id,
        batch_status: Some(status.to_string()),
        exit_status: None,
        start_time: None,
        end_time: None,
    }
}

pub fn instance(id: i64, file: Option<&str>, executions: Vec<BatchExecution>) -> BatchInstance {
    BatchInstance {
        instance_id: id,
        job_name: "message-import".to_string(),
        file_name: file.map(str::to_string),
        executions,
    }
}

/// Yield repeatedly so spawned tasks run to their next await point.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Advance Tokio's paused clock and let pollers observe the change.
pub async fn advance_and_settle(duration: Duration) {
    tokio::time::advance(duration).await;
    settle().await;
}
