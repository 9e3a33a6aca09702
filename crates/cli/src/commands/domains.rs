//! Domain command implementation.
//!
//! Responsibilities:
//! - Define domain subcommands (list, console-url, copy, delete, keycloak).
//! - Drive a `DomainsController`.
//!
//! Domains are never paged.

use anyhow::Result;
use clap::Subcommand;
use niord_admin::DomainsController;
use niord_config::Config;
use tracing::info;

use crate::cancellation::{CancellationToken, until_cancelled};
use crate::commands::{build_client_from_config, with_toasts};
use crate::formatters::{OutputFormat, get_formatter, output_result};
use crate::interactive::DeletePrompt;

#[derive(Subcommand)]
pub enum DomainsCommand {
    /// List domains, optionally filtered
    List {
        /// Case-insensitive text matched against client id and name
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Print the Keycloak admin console URL for the Niord clients
    ConsoleUrl,
    /// Create a new domain as a copy of an existing one
    Copy {
        /// Client id to copy
        #[arg(value_name = "CLIENT_ID")]
        client_id: String,
        /// Client id of the new domain
        #[arg(long)]
        new_id: String,
        /// Name of the new domain (defaults to the copied name)
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a domain
    Delete {
        /// Client id
        #[arg(value_name = "CLIENT_ID")]
        client_id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Create the Keycloak client backing a domain
    Keycloak {
        /// Client id
        #[arg(value_name = "CLIENT_ID")]
        client_id: String,
    },
}

pub async fn run(
    config: Config,
    command: DomainsCommand,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(&config)?;
    let mut controller = DomainsController::domains(client);

    if let DomainsCommand::ConsoleUrl = command {
        output_result(&controller.keycloak_url());
        return Ok(());
    }

    info!("Loading domains");
    let loaded = until_cancelled(cancel, controller.load()).await?;
    with_toasts(loaded, controller.toasts_mut())?;

    match command {
        DomainsCommand::ConsoleUrl => {}
        DomainsCommand::List { filter } => {
            if let Some(filter) = filter {
                controller.set_filter(filter);
            }
            let domains: Vec<_> = controller.view().visible().collect();
            let output = get_formatter(output_format).format_domains(&domains)?;
            output_result(&output);
        }
        DomainsCommand::Copy {
            client_id,
            new_id,
            name,
        } => {
            let begun = controller.begin_copy(&client_id);
            with_toasts(begun, controller.toasts_mut())?;
            if let Some(draft) = controller.draft_mut() {
                draft.client_id = Some(new_id.clone());
                if name.is_some() {
                    draft.name = name;
                }
            }
            let saved = until_cancelled(cancel, controller.save()).await?;
            with_toasts(saved, controller.toasts_mut())?;
            eprintln!("Domain '{}' created from '{}'", new_id, client_id);
        }
        DomainsCommand::Delete { client_id, force } => {
            let prompt = DeletePrompt::from_force(force);
            let deleted = until_cancelled(cancel, controller.delete(&client_id, &prompt)).await?;
            if with_toasts(deleted, controller.toasts_mut())? {
                eprintln!("Domain '{}' deleted successfully", client_id);
            } else {
                eprintln!("Deletion cancelled");
            }
        }
        DomainsCommand::Keycloak { client_id } => {
            let created =
                until_cancelled(cancel, controller.create_in_keycloak(&client_id)).await?;
            with_toasts(created, controller.toasts_mut())?;
            eprintln!("Domain '{}' created in Keycloak", client_id);
        }
    }

    Ok(())
}
