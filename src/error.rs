//! Error types for the Cadastro server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation failures live in [`crate::domain::ValidationError`]; they are
//! turned into notifications and never reach the HTTP layer as errors.

use thiserror::Error;

/// Errors that can occur when talking to the registration store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Record not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A record with the same identity already exists
    #[error("Duplicate record: {0}")]
    Duplicate(String),

    /// Generic storage error with context
    #[error("Storage error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading and startup wiring.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// A command has no registered handler
    #[error("No handler registered for command: {0}")]
    MissingHandler(&'static str),
}

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
