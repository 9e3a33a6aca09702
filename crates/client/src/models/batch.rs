//! Batch job models for the `/rest/batch` endpoints.
//!
//! Timestamps are sent by the server as epoch milliseconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of the batch subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStatus {
    #[serde(default)]
    pub running_executions: i64,
    /// Names of the batch job types known to the server
    #[serde(default)]
    pub types: Vec<String>,
}

/// One execution of a batch job instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchExecution {
    pub execution_id: i64,
    /// Raw JSR-352 batch status (STARTING, STARTED, STOPPING, ...)
    #[serde(default)]
    pub batch_status: Option<String>,
    #[serde(default)]
    pub exit_status: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub end_time: Option<DateTime<Utc>>,
}

/// A batch job instance with its executions, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchInstance {
    pub instance_id: i64,
    #[serde(default)]
    pub job_name: String,
    /// Name of the uploaded data file, if the job was started with one
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub executions: Vec<BatchExecution>,
}
