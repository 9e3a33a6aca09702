//! Transient notifications raised by the view models.
//!
//! Responsibilities:
//! - Model a toast (message, severity, time-to-live) with a unique id.
//! - Queue toasts until the presentation layer drains them.
//!
//! Does NOT handle:
//! - Rendering; the front end decides how and where toasts appear.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use uuid::Uuid;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Returns the default TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => Duration::from_secs(5),
            Self::Error => Duration::from_secs(10),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    /// Creates a new toast with the level's default TTL.
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    /// Overrides the time-to-live.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns true if this toast has expired (TTL elapsed).
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Pending toasts, oldest first.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: VecDeque<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.queue.push_back(toast);
    }

    /// Pending toasts without removing them.
    pub fn pending(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes and returns all pending toasts.
    pub fn drain(&mut self) -> Vec<Toast> {
        self.queue.drain(..).collect()
    }

    /// Drops toasts whose TTL has elapsed.
    pub fn prune_expired(&mut self) {
        self.queue.retain(|t| !t.is_expired());
    }
}
