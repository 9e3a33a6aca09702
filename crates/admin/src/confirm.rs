//! Confirmation collaborator used before destructive operations.

use std::future::Future;

/// Asks the user to confirm an operation.
///
/// Returning `false` means the user declined; callers treat that as a no-op.
pub trait Confirm: Send + Sync {
    fn confirm(&self, title: &str, message: &str) -> impl Future<Output = bool> + Send;
}

