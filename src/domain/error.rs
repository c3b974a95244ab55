//! Error types for the zjobs plugin.
//!
//! This module defines the centralized error type [`JobsError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for zjobs plugin operations.
///
/// At runtime there is exactly one failure kind that reaches a view:
/// [`JobsError::Fetch`]. It covers transport failures, non-success status codes
/// and undecodable bodies uniformly, and its `Display` output is the bare
/// message so views can show it verbatim. The remaining variants only occur
/// while loading configuration or writing trace files.
///
/// # Examples
///
/// ```
/// use zjobs::JobsError;
///
/// let err = JobsError::Fetch("Request failed with status code 404".to_string());
/// assert_eq!(err.to_string(), "Request failed with status code 404");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobsError {
    /// A request to the job-board API failed.
    #[error("{0}")]
    Fetch(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Stored as a message so the error stays `Clone` for view state.
    #[error("IO error: {0}")]
    Io(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for JobsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// A specialized `Result` type for zjobs operations.
pub type Result<T> = std::result::Result<T, JobsError>;
