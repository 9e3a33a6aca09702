//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Define a single, recognizable `Cancelled` error used to signal user-initiated
//!   cancellation (Ctrl+C/SIGINT) through `anyhow::Result`.
//! - Race view-model futures against the shared cancellation token.
//! - Centralize cancellation message and Unix-standard SIGINT exit code (130).
//!
//! Does NOT handle:
//! - This module does not install signal handlers by itself (see `main`).
//!
//! Invariants:
//! - Once cancelled, the token remains cancelled forever.

use std::fmt;
use std::future::Future;

pub use tokio_util::sync::CancellationToken;

/// Standard Unix exit code for SIGINT: 128 + 2.
pub const SIGINT_EXIT_CODE: u8 = 130;

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Runs `fut` to completion unless the token is cancelled first.
///
/// The output is returned untouched so callers can inspect view-model errors
/// before converting them.
pub async fn until_cancelled<F: Future>(
    cancel: &CancellationToken,
    fut: F,
) -> anyhow::Result<F::Output> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Cancelled.into()),
        out = fut => Ok(out),
    }
}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
