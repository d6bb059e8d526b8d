//! Error types.

use thiserror::Error;

/// Errors produced by the drawing engine.
#[derive(Debug, Error)]
pub enum DrawError {
    /// A drag operation was called without an active drag.
    #[error("invalid session state: `{operation}` called with no active drag")]
    InvalidSession {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// The options object could not be parsed.
    #[error("invalid drawing configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for drawing operations.
pub type Result<T> = std::result::Result<T, DrawError>;
