//! Error types for the admin view models.

use niord_client::ClientError;
use thiserror::Error;

/// Result type alias for view-model operations.
pub type Result<T> = std::result::Result<T, AdminError>;

/// Errors raised by the admin view models.
#[derive(Error, Debug)]
pub enum AdminError {
    /// A save or draft operation was requested without an active edit session.
    #[error("No entity is being edited")]
    NoEditSession,

    /// The requested entity is not part of the loaded list.
    #[error("{label} '{id}' not found")]
    NotFound { label: &'static str, id: String },

    /// An entity in edit mode lost its identifier.
    #[error("Cannot update {label} without an identifier")]
    MissingId { label: &'static str },

    /// A draft index was outside the current list.
    #[error("Index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The server call failed.
    #[error(transparent)]
    Backend(#[from] ClientError),
}

impl AdminError {
    pub(crate) fn not_found(label: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            label,
            id: id.to_string(),
        }
    }
}
