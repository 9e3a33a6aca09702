//! Batch job command implementation.
//!
//! Responsibilities:
//! - Define batch subcommands (status, instances, stop, restart, abandon,
//!   logs, download-url).
//! - Drive `BatchStatusWatcher`, `BatchMonitor` and `BatchLogFiles`.
//!
//! Invariants:
//! - `--watch` modes redraw only when the rendered output changes and end
//!   cleanly on Ctrl+C, stopping their pollers.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Subcommand;
use niord_admin::{BatchMonitor, BatchStatusWatcher};
use niord_client::NiordClient;
use niord_config::Config;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cancellation::{CancellationToken, until_cancelled};
use crate::commands::{build_client_from_config, server_pagination};
use crate::formatters::{Formatter, OutputFormat, get_formatter, output_result};

#[derive(Subcommand)]
pub enum BatchCommand {
    /// Show the number of running executions and the batch types
    Status {
        /// Keep polling and print changes until interrupted
        #[arg(short, long)]
        watch: bool,
    },
    /// List the instances and executions of a batch type
    Instances {
        /// Batch type, e.g. message-import
        #[arg(value_name = "BATCH_NAME")]
        batch_name: String,
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Keep polling and print changes until interrupted
        #[arg(short, long)]
        watch: bool,
    },
    /// Stop a running execution
    Stop {
        #[arg(value_name = "EXECUTION_ID")]
        execution_id: i64,
    },
    /// Restart a stopped or failed execution
    Restart {
        #[arg(value_name = "EXECUTION_ID")]
        execution_id: i64,
    },
    /// Abandon a stopped or failed execution
    Abandon {
        #[arg(value_name = "EXECUTION_ID")]
        execution_id: i64,
    },
    /// List the log files of an instance, or print one of them
    Logs {
        #[arg(value_name = "INSTANCE_ID")]
        instance_id: i64,
        /// Log file to print
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Print a download URL for the data file of an instance
    DownloadUrl {
        #[arg(value_name = "INSTANCE_ID")]
        instance_id: i64,
        /// Batch type the instance belongs to
        #[arg(short, long, value_name = "BATCH_NAME")]
        job: String,
        /// Page of the batch type holding the instance (1-based)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
}

pub async fn run(
    config: Config,
    command: BatchCommand,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(&config)?;
    let formatter = get_formatter(output_format);

    match command {
        BatchCommand::Status { watch: true } => {
            watch_status(client, &config, formatter.as_ref(), cancel).await
        }
        BatchCommand::Status { watch: false } => {
            let monitor = BatchMonitor::new(client, config.view.batch_page_size);
            until_cancelled(cancel, monitor.refresh()).await??;
            output_result(&formatter.format_batch_status(&monitor.snapshot().status)?);
            Ok(())
        }
        BatchCommand::Instances {
            batch_name,
            page,
            watch,
        } => {
            let monitor = if watch {
                BatchMonitor::from_config(client, &config.view)
            } else {
                BatchMonitor::new(client, config.view.batch_page_size)
            };
            info!(batch_name = %batch_name, "Loading batch instances");
            until_cancelled(cancel, monitor.select_batch_type(batch_name)).await??;
            if page > 1 {
                until_cancelled(cancel, monitor.set_page(page as usize - 1)).await??;
            }

            if watch {
                watch_instances(&monitor, &config, formatter.as_ref(), cancel).await
            } else {
                output_result(&render_instances(&monitor, formatter.as_ref())?);
                Ok(())
            }
        }
        BatchCommand::Stop { execution_id } => {
            let monitor = BatchMonitor::new(client, config.view.batch_page_size);
            until_cancelled(cancel, monitor.stop_execution(execution_id)).await??;
            eprintln!("Execution {} stopped", execution_id);
            Ok(())
        }
        BatchCommand::Restart { execution_id } => {
            let monitor = BatchMonitor::new(client, config.view.batch_page_size);
            until_cancelled(cancel, monitor.restart_execution(execution_id)).await??;
            eprintln!("Execution {} restarted", execution_id);
            Ok(())
        }
        BatchCommand::Abandon { execution_id } => {
            let monitor = BatchMonitor::new(client, config.view.batch_page_size);
            until_cancelled(cancel, monitor.abandon_execution(execution_id)).await??;
            eprintln!("Execution {} abandoned", execution_id);
            Ok(())
        }
        BatchCommand::Logs { instance_id, file } => {
            let monitor = BatchMonitor::new(client, config.view.batch_page_size);
            let mut logs = until_cancelled(cancel, monitor.log_files(instance_id)).await??;
            match file {
                None => output_result(&formatter.format_log_files(logs.files())?),
                Some(file) => {
                    until_cancelled(cancel, logs.select(Some(file))).await?;
                    match output_format {
                        OutputFormat::Json => output_result(&serde_json::to_string_pretty(
                            &serde_json::json!({
                                "instanceId": logs.instance_id(),
                                "file": logs.selection(),
                                "content": logs.content(),
                            }),
                        )?),
                        OutputFormat::Table => output_result(logs.content()),
                    }
                }
            }
            Ok(())
        }
        BatchCommand::DownloadUrl {
            instance_id,
            job,
            page,
        } => {
            let monitor = BatchMonitor::new(client, config.view.batch_page_size);
            until_cancelled(cancel, monitor.select_batch_type(job)).await??;
            if page > 1 {
                until_cancelled(cancel, monitor.set_page(page as usize - 1)).await??;
            }
            match until_cancelled(cancel, monitor.download_url(instance_id)).await?? {
                Some(url) => {
                    output_result(&url);
                    Ok(())
                }
                None => bail!("Batch instance {} has no data file", instance_id),
            }
        }
    }
}

fn render_instances(
    monitor: &BatchMonitor<NiordClient>,
    formatter: &dyn Formatter,
) -> Result<String> {
    let snapshot = monitor.snapshot();
    let pagination = server_pagination(snapshot.page, snapshot.result.total);
    formatter.format_executions(&snapshot.rows, &pagination)
}

async fn watch_status(
    client: Arc<NiordClient>,
    config: &Config,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    // CLI users are treated as administrators.
    let watcher = BatchStatusWatcher::from_config(client, &config.view, true);
    let mut updates = watcher.subscribe();
    let mut last = String::new();

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    debug!("Batch status watcher closed");
                    break;
                }
                let status = updates.borrow_and_update().clone();
                let rendered = formatter.format_batch_status(&status)?;
                if rendered != last {
                    output_result(&rendered);
                    last = rendered;
                }
            }
        }
    }

    watcher.stop();
    Ok(())
}

async fn watch_instances(
    monitor: &BatchMonitor<NiordClient>,
    config: &Config,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut ticker = tokio::time::interval(config.view.detail_poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = String::new();

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                let rendered = render_instances(monitor, formatter)?;
                if rendered != last {
                    output_result(&rendered);
                    last = rendered;
                }
            }
        }
    }

    monitor.stop();
    Ok(())
}
