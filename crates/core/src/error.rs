//! Error types for Taskdeck search
//!
//! Index operations are total and never fail. Errors only arise at the
//! edges: loading configuration and parsing caller-supplied input.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for Taskdeck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Taskdeck search
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (config file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be parsed, serialized or validated
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller-supplied value is malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
