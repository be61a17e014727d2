//! Client configuration.

use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://127.0.0.1:8000").
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new client configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a configuration for a server on localhost.
    pub fn localhost() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::localhost()
    }
}
