//! Batch job monitoring.
//!
//! Responsibilities:
//! - Map raw batch statuses onto display categories.
//! - Flatten instances with nested executions into table rows.
//! - Poll the batch status summary ([`BatchStatusWatcher`]) and the
//!   instances of one batch type ([`BatchMonitor`]).
//! - Browse the log files of an instance ([`BatchLogFiles`]).
//!
//! Invariants:
//! - Only the first execution row of an instance carries the instance header.
//! - Poll failures are logged and retried on the next tick; published state
//!   keeps its last good value.
//! - Shared state is guarded by a mutex that is never held across an await.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use niord_client::{BatchExecution, BatchInstance, BatchStatus, ExecutionAction, PagedSearchResult};
use niord_config::ViewConfig;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::backend::BatchBackend;
use crate::error::{AdminError, Result};
use crate::list_view::PageState;
use crate::poller::Poller;

/// Display category of a batch execution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExecutionCategory {
    Running,
    Stopped,
    Failed,
    Completed,
    Abandoned,
    Unknown,
}

impl ExecutionCategory {
    pub fn from_status(status: Option<&str>) -> Self {
        match status {
            Some("STARTING" | "STARTED") => Self::Running,
            Some("STOPPING" | "STOPPED") => Self::Stopped,
            Some("FAILED") => Self::Failed,
            Some("COMPLETED") => Self::Completed,
            Some("ABANDONED") => Self::Abandoned,
            _ => Self::Unknown,
        }
    }

    /// CSS label class used for the status badge.
    pub fn label_class(&self) -> &'static str {
        match self {
            Self::Running => "label-primary",
            Self::Stopped => "label-warning",
            Self::Failed => "label-danger",
            Self::Completed => "label-success",
            Self::Abandoned | Self::Unknown => "label-default",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Stopped => "Stopped",
            Self::Failed => "Failed",
            Self::Completed => "Completed",
            Self::Abandoned => "Abandoned",
            Self::Unknown => "Unknown",
        }
    }
}

/// Instance columns shown on the first row of each instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstanceHeader {
    pub instance_id: i64,
    pub job_name: String,
    pub file_name: Option<String>,
    /// Number of rows spanned by the instance
    pub execution_count: usize,
}

/// One execution in the flattened table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionRow {
    pub instance: Option<InstanceHeader>,
    pub execution: BatchExecution,
}

impl ExecutionRow {
    pub fn category(&self) -> ExecutionCategory {
        ExecutionCategory::from_status(self.execution.batch_status.as_deref())
    }
}

/// Flattens instances into execution rows, in instance then execution order.
pub fn flatten_executions(instances: &[BatchInstance]) -> Vec<ExecutionRow> {
    instances
        .iter()
        .flat_map(|instance| {
            instance
                .executions
                .iter()
                .enumerate()
                .map(move |(i, execution)| ExecutionRow {
                    instance: (i == 0).then(|| InstanceHeader {
                        instance_id: instance.instance_id,
                        job_name: instance.job_name.clone(),
                        file_name: instance.file_name.clone(),
                        execution_count: instance.executions.len(),
                    }),
                    execution: execution.clone(),
                })
        })
        .collect()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Polls the batch status summary for the admin menu badge.
#[derive(Debug)]
pub struct BatchStatusWatcher {
    status: watch::Receiver<BatchStatus>,
    poller: Poller,
}

impl BatchStatusWatcher {
    /// Starts polling every `period`, loading immediately. Non-admin users
    /// get an idle watcher that always reports the default status.
    pub fn start<B: BatchBackend>(backend: Arc<B>, period: Duration, is_admin: bool) -> Self {
        let (tx, rx) = watch::channel(BatchStatus::default());
        if !is_admin {
            return Self {
                status: rx,
                poller: Poller::idle(),
            };
        }

        let tx = Arc::new(tx);
        let poller = Poller::spawn("batch-status", period, move || {
            let backend = backend.clone();
            let tx = tx.clone();
            async move {
                match backend.status().await {
                    Ok(status) => {
                        tx.send_replace(status);
                    }
                    Err(e) => warn!(error = %e, "Failed to poll batch status"),
                }
            }
        });

        Self { status: rx, poller }
    }

    /// Starts polling with the configured status interval.
    pub fn from_config<B: BatchBackend>(backend: Arc<B>, view: &ViewConfig, is_admin: bool) -> Self {
        Self::start(backend, view.status_poll_interval, is_admin)
    }

    /// Latest status.
    pub fn status(&self) -> BatchStatus {
        self.status.borrow().clone()
    }

    pub fn running_executions(&self) -> i64 {
        self.status.borrow().running_executions
    }

    /// A receiver notified on every status update.
    pub fn subscribe(&self) -> watch::Receiver<BatchStatus> {
        self.status.clone()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_running() && !self.poller.is_cancelled()
    }

    /// Stops polling. Safe to call repeatedly.
    pub fn stop(&self) {
        self.poller.cancel();
    }
}

/// State published by [`BatchMonitor`].
#[derive(Debug, Clone, Serialize)]
pub struct MonitorSnapshot {
    pub status: BatchStatus,
    pub batch_name: Option<String>,
    #[serde(skip)]
    pub page: PageState,
    pub result: PagedSearchResult<BatchInstance>,
    pub rows: Vec<ExecutionRow>,
}

impl MonitorSnapshot {
    fn new(page_size: usize) -> Self {
        Self {
            status: BatchStatus::default(),
            batch_name: None,
            page: PageState::sized(page_size),
            result: PagedSearchResult::default(),
            rows: Vec::new(),
        }
    }

    fn clear_instances(&mut self) {
        self.result = PagedSearchResult::default();
        self.rows.clear();
    }
}

/// Polls the batch status and the instances of the selected batch type.
pub struct BatchMonitor<B> {
    backend: Arc<B>,
    state: Arc<Mutex<MonitorSnapshot>>,
    poller: Poller,
}

impl<B: BatchBackend> BatchMonitor<B> {
    /// Creates a monitor that refreshes only when asked.
    pub fn new(backend: Arc<B>, page_size: usize) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(MonitorSnapshot::new(page_size))),
            poller: Poller::idle(),
        }
    }

    /// Creates a monitor refreshing every `period`, starting immediately.
    pub fn start(backend: Arc<B>, page_size: usize, period: Duration) -> Self {
        let state = Arc::new(Mutex::new(MonitorSnapshot::new(page_size)));
        let poller = {
            let backend = backend.clone();
            let state = state.clone();
            Poller::spawn("batch-monitor", period, move || {
                let backend = backend.clone();
                let state = state.clone();
                async move {
                    if let Err(e) = refresh(backend.as_ref(), &state).await {
                        warn!(error = %e, "Failed to refresh batch instances");
                    }
                }
            })
        };

        Self {
            backend,
            state,
            poller,
        }
    }

    /// Creates a polling monitor from the view configuration.
    pub fn from_config(backend: Arc<B>, view: &ViewConfig) -> Self {
        Self::start(backend, view.batch_page_size, view.detail_poll_interval)
    }

    pub fn snapshot(&self) -> MonitorSnapshot {
        lock(&self.state).clone()
    }

    /// Reloads the status and then the selected instances.
    pub async fn refresh(&self) -> Result<()> {
        Ok(refresh(self.backend.as_ref(), &self.state).await?)
    }

    /// Shows the given batch type from its first page.
    pub async fn select_batch_type(&self, name: impl Into<String>) -> Result<()> {
        {
            let mut state = lock(&self.state);
            state.batch_name = Some(name.into());
            state.page.index = 0;
            state.clear_instances();
        }
        self.reload_instances().await
    }

    pub async fn set_page(&self, index: usize) -> Result<()> {
        lock(&self.state).page.index = index;
        self.reload_instances().await
    }

    pub async fn reload_instances(&self) -> Result<()> {
        Ok(load_instances(self.backend.as_ref(), &self.state).await?)
    }

    pub async fn stop_execution(&self, execution_id: i64) -> Result<()> {
        self.control(execution_id, ExecutionAction::Stop).await
    }

    pub async fn restart_execution(&self, execution_id: i64) -> Result<()> {
        self.control(execution_id, ExecutionAction::Restart).await
    }

    pub async fn abandon_execution(&self, execution_id: i64) -> Result<()> {
        self.control(execution_id, ExecutionAction::Abandon).await
    }

    async fn control(&self, execution_id: i64, action: ExecutionAction) -> Result<()> {
        self.backend.control(execution_id, action).await?;
        info!(execution_id, %action, "Batch execution updated");
        self.reload_instances().await
    }

    /// Download URL of a loaded instance's data file, if it has one.
    pub async fn download_url(&self, instance_id: i64) -> Result<Option<String>> {
        let file_name = {
            let state = lock(&self.state);
            let instance = state
                .result
                .data
                .iter()
                .find(|i| i.instance_id == instance_id)
                .ok_or_else(|| AdminError::not_found("batch instance", instance_id))?;
            instance.file_name.clone()
        };
        match file_name {
            Some(file_name) => Ok(Some(
                self.backend.download_url(instance_id, &file_name).await?,
            )),
            None => Ok(None),
        }
    }

    /// Opens the log file browser for an instance.
    pub async fn log_files(&self, instance_id: i64) -> Result<BatchLogFiles<B>> {
        BatchLogFiles::open(self.backend.clone(), instance_id).await
    }

    /// Stops polling. Safe to call repeatedly.
    pub fn stop(&self) {
        self.poller.cancel();
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_running() && !self.poller.is_cancelled()
    }
}

async fn refresh<B: BatchBackend>(
    backend: &B,
    state: &Mutex<MonitorSnapshot>,
) -> std::result::Result<(), niord_client::ClientError> {
    let status = backend.status().await?;
    lock(state).status = status;
    load_instances(backend, state).await
}

async fn load_instances<B: BatchBackend>(
    backend: &B,
    state: &Mutex<MonitorSnapshot>,
) -> std::result::Result<(), niord_client::ClientError> {
    let (name, page) = {
        let state = lock(state);
        (state.batch_name.clone(), state.page)
    };
    let Some(name) = name else {
        return Ok(());
    };

    let page_size = page.size.unwrap_or(usize::MAX);
    let result = backend.instances(&name, page.index, page_size).await?;

    let mut state = lock(state);
    if state.batch_name.as_deref() != Some(name.as_str()) || state.page != page {
        debug!(batch_name = %name, "Discarding instances for a stale selection");
        return Ok(());
    }
    state.rows = flatten_executions(&result.data);
    state.result = result;
    Ok(())
}

/// Log file browser of one batch instance.
pub struct BatchLogFiles<B> {
    backend: Arc<B>,
    instance_id: i64,
    files: Vec<String>,
    selection: Option<String>,
    content: String,
}

impl<B: BatchBackend> BatchLogFiles<B> {
    /// Loads the log file names of the instance.
    pub async fn open(backend: Arc<B>, instance_id: i64) -> Result<Self> {
        let files = backend.log_files(instance_id).await?;
        Ok(Self {
            backend,
            instance_id,
            files,
            selection: None,
            content: String::new(),
        })
    }

    pub fn instance_id(&self) -> i64 {
        self.instance_id
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Content of the selected file, or the error text if it failed to load.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Selects a file and loads its content. `None` or an empty name clears it.
    pub async fn select(&mut self, file: Option<String>) {
        self.selection = file.filter(|f| !f.is_empty());
        self.reload().await;
    }

    /// Reloads the selected file.
    pub async fn reload(&mut self) {
        let Some(file) = &self.selection else {
            self.content.clear();
            return;
        };
        self.content = match self.backend.log_file(self.instance_id, file).await {
            Ok(content) => content,
            Err(e) => {
                warn!(instance_id = self.instance_id, file = %file, error = %e, "Failed to load log file");
                e.to_string()
            }
        };
    }
}
