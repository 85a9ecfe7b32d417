//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! The index itself never fails; these errors come from validating requests,
//! checking group membership and loading configuration.

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | HTTP code |
/// |----------|----------|-----------|
/// | Validation | `InvalidInput` | `BAD_INPUT` |
/// | Access | `Forbidden` | `FORBIDDEN` |
/// | System | `Io`, `Config`, `Internal` | `INTERNAL` |
///
/// # Example
///
/// ```ignore
/// use taskdeck_executor::{Command, Error, Executor};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::Forbidden { group }) => {
///         println!("not a member of {}", group);
///     }
///     Err(e) => {
///         println!("Error: {}", e);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation Errors ====================
    /// Request parameters are missing or malformed
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // ==================== Access Errors ====================
    /// Caller is not a member of the group
    #[error("forbidden: caller is not a member of group {group}")]
    Forbidden { group: String },

    // ==================== System Errors ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Internal error (bug or unexpected state)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl Error {
    /// Wire code surfaced by the HTTP layer
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput { .. } => "BAD_INPUT",
            Error::Forbidden { .. } => "FORBIDDEN",
            Error::Io { .. } | Error::Config { .. } | Error::Internal { .. } => "INTERNAL",
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }
}
