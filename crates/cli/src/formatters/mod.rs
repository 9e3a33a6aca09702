//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide table and JSON renderings of the Niord admin resources.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - JSON output is always valid JSON, `[]` for empty lists.
//! - Table output prints a human message for empty lists and `-` for missing values.

use anyhow::Result;
use clap::ValueEnum;
use niord_admin::ExecutionRow;
use niord_client::{BatchStatus, Chart, Domain, PagedSearchResult, Template};

mod json;
mod table;


pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Representation of missing values in table output.
pub const MISSING: &str = "-";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Position of a printed page within a paged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index
    pub page: usize,
    pub page_count: usize,
    /// Matches across all pages
    pub total: usize,
}

/// Formatter trait for the supported resources.
pub trait Formatter {
    fn format_charts(&self, charts: &[&Chart], pagination: &Pagination) -> Result<String>;

    fn format_domains(&self, domains: &[&Domain]) -> Result<String>;

    /// Format one page of a template search. `lang` picks the displayed name.
    fn format_templates(
        &self,
        result: &PagedSearchResult<Template>,
        lang: &str,
        pagination: &Pagination,
    ) -> Result<String>;

    fn format_batch_status(&self, status: &BatchStatus) -> Result<String>;

    fn format_executions(&self, rows: &[ExecutionRow], pagination: &Pagination)
    -> Result<String>;

    fn format_log_files(&self, files: &[String]) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// Print formatted output to stdout, ending with a newline.
pub fn output_result(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}
