//! Error types for the JSON request helper.
//!
//! # Design
//! One variant per phase of a call, each carrying the underlying cause.
//! Non-success responses land in `Status` with the raw status code and body
//! for debugging.

use thiserror::Error;

/// Errors returned by `JsonClient` calls.
#[derive(Debug, Error)]
pub enum Error {
    /// The request payload could not be serialized to JSON.
    #[error("failed encoding request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The method token, URL or a stored header was malformed.
    #[error("failed creating request: {0}")]
    Build(#[source] ::http::Error),

    /// The transport could not complete the exchange.
    #[error("failed sending request: {0}")]
    Transport(#[source] TransportError),

    /// The server answered with a status code of 300 or above.
    #[error("bad status code '{status}': {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the target.
    #[error("failed decoding response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// Status code of a `Status` error, `None` for every other phase.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failures reported by a `Transport` implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}
