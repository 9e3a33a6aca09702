//! Chart command implementation.
//!
//! Responsibilities:
//! - Define chart subcommands (list, copy, delete).
//! - Drive a `ChartsController` and print its current page.

use anyhow::Result;
use clap::Subcommand;
use niord_admin::ChartsController;
use niord_config::Config;
use tracing::info;

use crate::cancellation::{CancellationToken, until_cancelled};
use crate::commands::{build_client_from_config, list_pagination, with_toasts};
use crate::formatters::{OutputFormat, get_formatter, output_result};
use crate::interactive::DeletePrompt;

#[derive(Subcommand)]
pub enum ChartsCommand {
    /// List charts, optionally filtered
    List {
        /// Case-insensitive text matched against number, international number and name
        #[arg(short, long)]
        filter: Option<String>,
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Charts per page (defaults to the configured chart page size)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Create a new chart as a copy of an existing one
    Copy {
        /// Chart number to copy
        #[arg(value_name = "NUMBER")]
        number: String,
        /// Chart number of the new chart
        #[arg(long)]
        new_number: String,
        /// Name of the new chart (defaults to the copied name)
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a chart
    Delete {
        /// Chart number
        #[arg(value_name = "NUMBER")]
        number: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(
    config: Config,
    command: ChartsCommand,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(&config)?;
    let mut controller = ChartsController::charts(client, &config.view);

    info!("Loading charts");
    let loaded = until_cancelled(cancel, controller.load()).await?;
    with_toasts(loaded, controller.toasts_mut())?;

    match command {
        ChartsCommand::List {
            filter,
            page,
            page_size,
        } => {
            if let Some(size) = page_size {
                controller.set_page_size(Some(size));
            }
            if let Some(filter) = filter {
                controller.set_filter(filter);
            }
            controller.set_page(page as usize - 1);

            let view = controller.view();
            let charts: Vec<_> = view.visible().collect();
            let output =
                get_formatter(output_format).format_charts(&charts, &list_pagination(view))?;
            output_result(&output);
        }
        ChartsCommand::Copy {
            number,
            new_number,
            name,
        } => {
            let begun = controller.begin_copy(&number);
            with_toasts(begun, controller.toasts_mut())?;
            if let Some(draft) = controller.draft_mut() {
                draft.chart_number = Some(new_number.clone());
                if name.is_some() {
                    draft.name = name;
                }
            }
            let saved = until_cancelled(cancel, controller.save()).await?;
            with_toasts(saved, controller.toasts_mut())?;
            eprintln!("Chart '{}' created from '{}'", new_number, number);
        }
        ChartsCommand::Delete { number, force } => {
            let prompt = DeletePrompt::from_force(force);
            let deleted = until_cancelled(cancel, controller.delete(&number, &prompt)).await?;
            if with_toasts(deleted, controller.toasts_mut())? {
                eprintln!("Chart '{}' deleted successfully", number);
            } else {
                eprintln!("Deletion cancelled");
            }
        }
    }

    Ok(())
}
