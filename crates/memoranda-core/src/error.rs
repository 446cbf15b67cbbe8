//! Error types for memoranda.

use thiserror::Error;

/// Result type alias using memoranda's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for memoranda operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found; the message is surfaced to clients verbatim
    #[error("{0}")]
    NotFound(String),

    /// Invalid input rejected at the API boundary; surfaced verbatim
    #[error("{0}")]
    InvalidInput(String),

    /// Storage-layer constraint violations, one message per violated field
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// A malformed identifier reached the storage layer
    #[error("Missing or invalid data!")]
    Cast,

    /// Unique-constraint violation reported by the store
    #[error("Duplicate {field}: \"{value}\" already exists!")]
    Duplicate { field: String, value: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure with no usable diagnostic information
    #[error("Unknown error!")]
    Unknown,
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
