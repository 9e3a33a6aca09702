//! Message template command implementation.
//!
//! Responsibilities:
//! - Define template subcommands (list, export, import, execute, delete).
//! - Drive a `TemplatesController`; searching and paging happen on the server.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use niord_admin::TemplatesController;
use niord_client::TemplateSearchParams;
use niord_config::Config;
use tracing::info;

use crate::cancellation::{CancellationToken, until_cancelled};
use crate::commands::{build_client_from_config, server_pagination, with_toasts};
use crate::formatters::{OutputFormat, get_formatter, output_result};
use crate::interactive::DeletePrompt;

#[derive(Subcommand)]
pub enum TemplatesCommand {
    /// Search message templates
    List {
        /// Name search term
        #[arg(short, long, default_value = "")]
        name: String,
        /// Category id
        #[arg(short, long)]
        category: Option<i64>,
        /// Restrict to templates of a domain (client id)
        #[arg(long = "in-domain", value_name = "CLIENT_ID")]
        in_domain: Option<String>,
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Language used for names (defaults to the first model language)
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Print a download URL for an export of all templates
    Export,
    /// Import message templates from a JSON export file
    Import {
        /// The JSON file to upload
        file: PathBuf,
    },
    /// Run a template against an existing message and print the result
    Execute {
        /// Template id
        #[arg(value_name = "ID")]
        id: i64,
        /// Message id or short id
        #[arg(value_name = "MESSAGE_ID")]
        message_id: String,
    },
    /// Delete a message template
    Delete {
        /// Template id
        #[arg(value_name = "ID")]
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(
    config: Config,
    command: TemplatesCommand,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(&config)?;
    let mut controller = TemplatesController::new(client, &config.view);

    match command {
        TemplatesCommand::List {
            name,
            category,
            in_domain,
            page,
            lang,
        } => {
            info!(name = %name, "Searching message templates");
            let params = TemplateSearchParams {
                name,
                category,
                domain: in_domain,
            };
            let searched = until_cancelled(cancel, controller.set_params(params)).await?;
            with_toasts(searched, controller.toasts_mut())?;
            if page > 1 {
                let paged =
                    until_cancelled(cancel, controller.set_page(page as usize - 1)).await?;
                with_toasts(paged, controller.toasts_mut())?;
            }

            let lang = lang
                .or_else(|| config.view.languages.first().cloned())
                .unwrap_or_else(|| "en".to_string());
            let pagination = server_pagination(controller.page(), controller.result().total);
            let output = get_formatter(output_format).format_templates(
                controller.result(),
                &lang,
                &pagination,
            )?;
            output_result(&output);
        }
        TemplatesCommand::Export => {
            let url = until_cancelled(cancel, controller.export_url()).await?;
            output_result(&with_toasts(url, controller.toasts_mut())?);
        }
        TemplatesCommand::Import { file } => {
            let content = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            let file_name = file
                .file_name()
                .and_then(|s| s.to_str())
                .context("Failed to determine filename from path")?
                .to_string();

            info!(file = %file.display(), "Importing message templates");
            let report = until_cancelled(cancel, controller.upload(&file_name, content)).await?;
            let report = with_toasts(report, controller.toasts_mut())?;
            if !report.trim().is_empty() {
                output_result(&report);
            }
            eprintln!("Message templates imported from {}", file.display());
        }
        TemplatesCommand::Execute { id, message_id } => {
            let begun = until_cancelled(cancel, controller.begin_edit(id)).await?;
            with_toasts(begun, controller.toasts_mut())?;
            let message = until_cancelled(cancel, controller.execute(&message_id)).await?;
            let message = with_toasts(message, controller.toasts_mut())?;
            output_result(&serde_json::to_string_pretty(&message)?);
        }
        TemplatesCommand::Delete { id, force } => {
            let prompt = DeletePrompt::from_force(force);
            let deleted = until_cancelled(cancel, controller.delete(id, &prompt)).await?;
            if with_toasts(deleted, controller.toasts_mut())? {
                eprintln!("Message template {} deleted successfully", id);
            } else {
                eprintln!("Deletion cancelled");
            }
        }
    }

    Ok(())
}
