//! Error types for proglog.

use crate::model::Offset;

/// Errors returned by log operations and the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested offset is at or past the end of the log.
    #[error("offset not found")]
    OffsetNotFound { offset: Offset },

    /// A request could not be decoded.
    #[error("{0}")]
    InvalidInput(String),

    /// The server could not bind or serve.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for proglog operations.
pub type Result<T> = std::result::Result<T, Error>;
