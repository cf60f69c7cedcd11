//! Error types for CLI commands
//!
//! Data problems inside a property evaluation are values, not errors; they
//! only become a [`CommandError`] when the caller asks for `--strict`.

use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// Attribute argument not of the form `ATTR=VALUE`
    #[error("Invalid attribute assignment '{0}', expected ATTR=VALUE")]
    InvalidAssignment(String),

    /// No property is registered under the requested category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Evaluation produced an error value in strict mode
    #[error("{category}.{name} failed: {reason}")]
    EvaluationFailed {
        /// Property category
        category: String,
        /// Property name
        name: String,
        /// Reason reported by the operator
        reason: String,
    },

    /// Lookup, configuration or I/O failure from the library crates
    #[error(transparent)]
    Core(#[from] propex_core::Error),

    /// JSON output failure
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;
