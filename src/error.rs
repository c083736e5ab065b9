// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetrievalError>;

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller-supplied input violates a precondition. Raised before any
    /// network call is made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The external service could not be reached, answered with a
    /// non-success status, or acknowledged ambiguously.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response arrived but its shape violates the documented contract.
    #[error("Malformed response: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
