//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and `NIORD_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build configuration (see `main`).

use clap::{Parser, Subcommand};

use crate::commands;
use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "niord-cli")]
#[command(about = "Niord CLI - Administer a Niord server from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  niord-cli charts list --filter north\n  niord-cli domains console-url\n  niord-cli templates list --name firing --page 1\n  niord-cli batch status --watch\n  niord-cli batch instances message-import --watch\n  niord-cli -o json batch logs 42 --file import.log\n"
)]
pub struct Cli {
    /// Base URL of the Niord server (e.g., http://localhost:8080)
    #[arg(short, long, global = true, env = "NIORD_BASE_URL")]
    pub base_url: Option<String>,

    /// Keycloak bearer token sent with every request
    #[arg(short, long, global = true, env = "NIORD_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Base URL of the Keycloak server (defaults to <base-url>/auth)
    #[arg(long, global = true, env = "NIORD_AUTH_SERVER_URL")]
    pub auth_server_url: Option<String>,

    /// Niord domain (Keycloak client id) to operate on
    #[arg(short, long, global = true, env = "NIORD_DOMAIN")]
    pub domain: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum number of retries for failed requests
    #[arg(long, global = true)]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and manage sea charts
    Charts {
        #[command(subcommand)]
        command: commands::charts::ChartsCommand,
    },

    /// List and manage domains
    Domains {
        #[command(subcommand)]
        command: commands::domains::DomainsCommand,
    },

    /// Search and manage message templates
    Templates {
        #[command(subcommand)]
        command: commands::templates::TemplatesCommand,
    },

    /// Monitor and control batch jobs
    Batch {
        #[command(subcommand)]
        command: commands::batch::BatchCommand,
    },
}
