//! Mapping of handler failures to HTTP responses.
//!
//! - Body decode failures keep axum's own rejection response (4xx)
//! - Every relay failure becomes 502 Bad Gateway

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::relay::RelayError;

/// Error returned by the ingress handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body did not bind to a soil sample.
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] JsonRejection),

    /// The upstream call failed.
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ApiError {
    /// Status code sent to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(rejection) => rejection.status(),
            ApiError::Relay(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MalformedRequest(rejection) => {
                tracing::debug!(status = %rejection.status(), error = %rejection, "Rejected soil sample");
                rejection.into_response()
            }
            ApiError::Relay(e) => {
                tracing::error!(error = %e, "Prediction relay failed");
                let message = match e {
                    RelayError::UpstreamUnavailable(_) => "Upstream prediction service unavailable",
                    RelayError::UpstreamProtocolError(_) => {
                        "Upstream prediction service returned an invalid response"
                    }
                };
                (StatusCode::BAD_GATEWAY, message).into_response()
            }
        }
    }
}
