//! Domain-level errors.
//!
//! These errors describe hashing failures and bad input. They are
//! independent of infrastructure concerns (HTTP, JSON, transport encoding).

use thiserror::Error;

/// Domain-specific errors for hashing and verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The hashing primitive could not produce a hash
    #[error("Hashing failed: {0}")]
    Hashing(String),

    /// Input could not be decoded or parsed
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Algorithm name or hash prefix is not one we support
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Configuration value out of range
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a hashing error
    pub fn hashing(msg: impl Into<String>) -> Self {
        DomainError::Hashing(msg.into())
    }

    /// Create a malformed input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        DomainError::MalformedInput(msg.into())
    }

    /// Create an unsupported algorithm error
    pub fn unsupported(name: impl Into<String>) -> Self {
        DomainError::UnsupportedAlgorithm(name.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
