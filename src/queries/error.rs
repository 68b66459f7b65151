//! Error types for saved query operations
//!
//! This module defines all possible errors that can occur while storing and
//! recalling saved queries, including validation, I/O and serialization errors.

use std::io;
use thiserror::Error;

/// Errors that can occur during saved query operations
#[derive(Debug, Error)]
pub enum QueryError {
    /// Query not found
    #[error("Saved query '{0}' not found")]
    NotFound(String),

    /// Query already exists
    #[error("Saved query '{0}' already exists")]
    AlreadyExists(String),

    /// Invalid query name
    #[error("Invalid query name '{0}': {1}")]
    InvalidName(String, String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<toml::de::Error> for QueryError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for QueryError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
