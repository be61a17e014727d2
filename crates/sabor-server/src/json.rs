//! JSON response types that are not catalog records.

use serde::{Deserialize, Serialize};

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error flag.
    pub error: bool,
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Number of restaurants in the catalog.
    pub restaurants: usize,
    /// Directory the menus were loaded from.
    pub menu_dir: String,
    /// Metadata file the catalog was loaded with.
    pub metadata_file: String,
}

/// Root endpoint response.
#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
}
