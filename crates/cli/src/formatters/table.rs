//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format resources as tab-separated tables.
//! - Append a page footer to paged lists.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use niord_admin::ExecutionRow;
use niord_client::{BatchStatus, Chart, Domain, PagedSearchResult, Template};

use crate::formatters::{Formatter, MISSING, Pagination};

/// Table formatter.
pub struct TableFormatter;

fn opt<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Build a page footer. Returns `None` for single-page lists.
pub fn build_pagination_footer(p: &Pagination) -> Option<String> {
    if p.page_count <= 1 {
        return None;
    }
    Some(format!(
        "Page {} of {} ({} total)",
        p.page.saturating_add(1),
        p.page_count,
        p.total
    ))
}

fn push_footer(output: &mut String, pagination: &Pagination) {
    if let Some(footer) = build_pagination_footer(pagination) {
        output.push('\n');
        output.push_str(&footer);
        output.push('\n');
    }
}

impl Formatter for TableFormatter {
    fn format_charts(&self, charts: &[&Chart], pagination: &Pagination) -> Result<String> {
        if charts.is_empty() {
            return Ok("No charts found.".to_string());
        }

        let mut output = String::from("Number\tIntl\tName\tScale\tDatum\tActive\n");
        for chart in charts {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                opt(chart.chart_number.as_deref()),
                opt(chart.international_number),
                opt(chart.name.as_deref()),
                opt(chart.scale.map(|s| format!("1:{}", s))),
                opt(chart.horizontal_datum.as_deref()),
                yes_no(chart.active),
            ));
        }
        push_footer(&mut output, pagination);
        Ok(output)
    }

    fn format_domains(&self, domains: &[&Domain]) -> Result<String> {
        if domains.is_empty() {
            return Ok("No domains found.".to_string());
        }

        let mut output = String::from("Client ID\tName\tTime Zone\tActive\tKeycloak\n");
        for domain in domains {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                opt(domain.client_id.as_deref()),
                opt(domain.name.as_deref()),
                opt(domain.time_zone.as_deref()),
                yes_no(domain.active),
                opt(domain.in_keycloak.map(yes_no)),
            ));
        }
        Ok(output)
    }

    fn format_templates(
        &self,
        result: &PagedSearchResult<Template>,
        lang: &str,
        pagination: &Pagination,
    ) -> Result<String> {
        if result.data.is_empty() {
            return Ok("No message templates found.".to_string());
        }

        let mut output = String::from("ID\tName\tCategory\tDomains\tPaths\n");
        for template in &result.data {
            let name = template.desc(lang).and_then(|d| d.name.as_deref());
            let category = template
                .category
                .as_ref()
                .and_then(|c| c.desc(lang))
                .and_then(|d| d.name.as_deref());
            let domains = template
                .domains
                .iter()
                .filter_map(|d| d.client_id.as_deref())
                .collect::<Vec<_>>()
                .join(",");
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                opt(template.id),
                opt(name),
                opt(category),
                if domains.is_empty() { MISSING } else { &domains },
                template.script_resource_paths.len(),
            ));
        }

        push_footer(&mut output, pagination);
        Ok(output)
    }

    fn format_batch_status(&self, status: &BatchStatus) -> Result<String> {
        let mut output = format!("Running executions: {}\n", status.running_executions);
        if status.types.is_empty() {
            output.push_str("No batch types found.\n");
        } else {
            output.push_str("Batch types:\n");
            for name in &status.types {
                output.push_str(&format!("  {}\n", name));
            }
        }
        Ok(output)
    }

    fn format_executions(&self, rows: &[ExecutionRow], pagination: &Pagination) -> Result<String> {
        if rows.is_empty() {
            return Ok("No batch executions found.".to_string());
        }

        let mut output = String::from("Instance\tFile\tExecution\tStatus\tStarted\tEnded\n");
        for row in rows {
            let (instance, file) = match &row.instance {
                Some(header) => (
                    format!("{} ({})", header.instance_id, header.execution_count),
                    opt(header.file_name.as_deref()),
                ),
                None => (String::new(), String::new()),
            };
            let execution = &row.execution;
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                instance,
                file,
                execution.execution_id,
                row.category().label(),
                opt(execution.start_time.map(|t| t.format("%Y-%m-%d %H:%M:%S"))),
                opt(execution.end_time.map(|t| t.format("%Y-%m-%d %H:%M:%S"))),
            ));
        }
        push_footer(&mut output, pagination);
        Ok(output)
    }

    fn format_log_files(&self, files: &[String]) -> Result<String> {
        if files.is_empty() {
            return Ok("No log files found.".to_string());
        }
        let mut output = String::new();
        for file in files {
            output.push_str(file);
            output.push('\n');
        }
        Ok(output)
    }
}
