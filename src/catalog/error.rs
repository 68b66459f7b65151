//! Error types for catalog loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an item catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file extension does not name a supported format
    #[error("Unsupported catalog format for '{}' (expected .json, .toml or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON catalog
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML catalog
    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed CSV catalog
    #[error("Invalid CSV catalog: {0}")]
    Csv(#[from] csv::Error),
}
