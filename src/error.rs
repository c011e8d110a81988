//! Error types for the directory core.

use thiserror::Error;

/// Directory errors.
///
/// Payloads are rendered messages so errors can travel through the app event channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The record source could not be reached, answered with a non-success status or sent a body
    /// that is not a record list.
    #[error("Record source unavailable: {0}")]
    SourceUnavailable(String),

    /// Persisted history exists but cannot be parsed.
    #[error("History store corrupt: {0}")]
    HistoryStoreCorrupt(String),

    /// Persisting the history failed.
    #[error("Failed to write history: {0}")]
    HistoryWrite(String),
}

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
