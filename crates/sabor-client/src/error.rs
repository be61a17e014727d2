//! Client error types.

use thiserror::Error;

/// Client errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The request never got a response (refused, unreachable, timed out).
    #[error("could not reach the API: {0}")]
    Connection(#[source] reqwest::Error),

    /// The server answered with a failure status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not what the client expected.
    #[error("invalid response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Downloaded data was not in the expected shape.
    #[error("invalid dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    /// Local file error while saving fetched data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status reported by the server, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
