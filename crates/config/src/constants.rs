//! Centralized constants for the Niord admin workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Niord server port.
pub const DEFAULT_NIORD_PORT: u16 = 8080;

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound for the configurable retry count.
pub const MAX_MAX_RETRIES: usize = 10;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Header carrying the current Niord domain on every request.
pub const DOMAIN_HEADER: &str = "NiordDomain";

// =============================================================================
// View Defaults
// =============================================================================

/// Default model languages, in display order.
pub const DEFAULT_LANGUAGES: &[&str] = &["en", "da"];

/// Default page size of the charts list.
pub const DEFAULT_CHART_PAGE_SIZE: usize = 10;

/// Default page size of the message template search.
pub const DEFAULT_TEMPLATE_PAGE_SIZE: usize = 10;

/// Default page size of the batch instance list.
pub const DEFAULT_BATCH_PAGE_SIZE: usize = 5;

// =============================================================================
// Polling Defaults
// =============================================================================

/// Interval between batch status summary refreshes, in seconds.
pub const DEFAULT_STATUS_POLL_SECS: u64 = 10;

/// Interval between batch instance detail refreshes, in seconds.
pub const DEFAULT_DETAIL_POLL_SECS: u64 = 3;

/// Maximum allowed polling interval in seconds (1 hour).
pub const MAX_POLL_SECS: u64 = 3600;
