//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - All commands receive the shared cancellation token.

use anyhow::Result;
use niord_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    match cli.command {
        Commands::Charts { command } => {
            commands::charts::run(config, command, cli.output, cancel_token).await?;
        }
        Commands::Domains { command } => {
            commands::domains::run(config, command, cli.output, cancel_token).await?;
        }
        Commands::Templates { command } => {
            commands::templates::run(config, command, cli.output, cancel_token).await?;
        }
        Commands::Batch { command } => {
            commands::batch::run(config, command, cli.output, cancel_token).await?;
        }
    }

    Ok(())
}
