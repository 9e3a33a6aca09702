//! CLI command implementations.
//!
//! Each command drives one of the `niord_admin` view models against a
//! [`NiordClient`] and prints the resulting state with a formatter.

pub mod batch;
pub mod charts;
pub mod domains;
pub mod templates;

use std::sync::Arc;

use anyhow::{Context, Result};
use niord_admin::{ListView, PageState, Toasts};
use niord_client::NiordClient;
use niord_config::Config;

use crate::formatters::Pagination;

/// Build a shared client from the loaded configuration.
pub fn build_client_from_config(config: &Config) -> Result<Arc<NiordClient>> {
    let client = NiordClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Niord client")?;
    Ok(Arc::new(client))
}

/// Attaches any queued notifications to a failed view-model call.
///
/// On success the notifications are printed to stderr instead.
pub fn with_toasts<T>(result: niord_admin::Result<T>, toasts: &mut Toasts) -> Result<T> {
    let pending = toasts.drain();
    if result.is_ok() {
        for toast in &pending {
            eprintln!("{}", toast.message);
        }
    }
    result.map_err(|e| {
        let messages: Vec<String> = pending.into_iter().map(|t| t.message).collect();
        if messages.is_empty() {
            anyhow::Error::from(e)
        } else {
            anyhow::Error::from(e).context(messages.join("; "))
        }
    })
}

/// Pagination of the current page of a client-side list.
pub fn list_pagination<E: niord_admin::AdminEntity>(view: &ListView<E>) -> Pagination {
    Pagination {
        page: view.page().index,
        page_count: view.page_count(),
        total: view.filtered_count(),
    }
}

/// Pagination of a server-side page with `total` matches.
pub fn server_pagination(page: PageState, total: usize) -> Pagination {
    Pagination {
        page: page.index,
        page_count: page.page_count(total),
        total,
    }
}

#[cfg(test)]
mod tests {
    use niord_admin::{AdminError, Toast};

    use super::*;

    #[test]
    fn test_with_toasts_adds_messages_as_context() {
        let mut toasts = Toasts::new();
        toasts.push(Toast::error("Error saving chart"));

        let err = with_toasts::<()>(Err(AdminError::NoEditSession), &mut toasts).unwrap_err();

        assert_eq!(err.to_string(), "Error saving chart");
        assert!(err.downcast_ref::<AdminError>().is_some());
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_with_toasts_passes_ok_through() {
        let mut toasts = Toasts::new();
        assert_eq!(with_toasts(Ok(3), &mut toasts).unwrap(), 3);
    }

    #[test]
    fn test_server_pagination() {
        let p = server_pagination(PageState::sized(10), 25);
        assert_eq!(p.page_count, 3);
        assert_eq!(p.total, 25);
    }
}
