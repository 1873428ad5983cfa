//! Relay error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while relaying a prediction request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The upstream could not be reached (connect, DNS, timeout, transport).
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[source] reqwest::Error),

    /// The upstream answered, but not with a usable verdict.
    #[error("Upstream protocol error: {0}")]
    UpstreamProtocolError(#[from] ProtocolError),
}

/// Ways an upstream reply can fail to be a verdict.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Non-2xx status.
    #[error("unexpected status {status}")]
    Status { status: StatusCode, body: String },

    /// Body is not the expected JSON shape.
    #[error("malformed body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;
