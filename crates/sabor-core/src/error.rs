//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Catalog errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No restaurant is stored under the normalized name.
    #[error("restaurant not found: {0}")]
    NotFound(String),

    /// A restaurant with the normalized name already exists.
    #[error("restaurant already exists: {0}")]
    Conflict(String),

    /// A record failed field validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A data file is not valid JSON.
    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A data file could not be read.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
