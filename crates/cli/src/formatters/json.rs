//! JSON formatter implementation.
//!
//! Pagination is not rendered; JSON output carries the items only.

use anyhow::Result;
use niord_admin::ExecutionRow;
use niord_client::{BatchStatus, Chart, Domain, PagedSearchResult, Template};

use crate::formatters::{Formatter, Pagination};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_charts(&self, charts: &[&Chart], _pagination: &Pagination) -> Result<String> {
        Ok(serde_json::to_string_pretty(charts)?)
    }

    fn format_domains(&self, domains: &[&Domain]) -> Result<String> {
        Ok(serde_json::to_string_pretty(domains)?)
    }

    fn format_templates(
        &self,
        result: &PagedSearchResult<Template>,
        _lang: &str,
        _pagination: &Pagination,
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    fn format_batch_status(&self, status: &BatchStatus) -> Result<String> {
        Ok(serde_json::to_string_pretty(status)?)
    }

    fn format_executions(&self, rows: &[ExecutionRow], _pagination: &Pagination) -> Result<String> {
        Ok(serde_json::to_string_pretty(rows)?)
    }

    fn format_log_files(&self, files: &[String]) -> Result<String> {
        Ok(serde_json::to_string_pretty(files)?)
    }
}
