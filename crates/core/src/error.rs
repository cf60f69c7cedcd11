//! Base error types for propex
//!
//! Data-level evaluation failures are not errors at this level: they are
//! rendered into the property's result string. What remains here are the
//! hard faults a caller has to handle.

use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// No property is registered under the requested key
    #[error("Property not found: {category}.{name}")]
    PropertyNotFound {
        /// Requested category
        category: String,
        /// Requested property name
        name: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read or applied
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a `PropertyNotFound` error
    pub fn not_found(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self::PropertyNotFound {
            category: category.into(),
            name: name.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
