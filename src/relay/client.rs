//! HTTP client for the upstream prediction service.
//!
//! # Responsibilities
//! - Serialize the sample and POST it to the configured URL
//! - Reject non-2xx replies
//! - Decode the reply into a verdict without touching its content

use url::Url;

use crate::relay::error::{ProtocolError, RelayError, RelayResult};
use crate::soil::{SoilHealthVerdict, SoilSample};

/// Stateless relay to the prediction service.
///
/// Cheap to share behind an `Arc`; the inner `reqwest::Client` pools
/// connections on its own.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    upstream_url: Url,
}

impl RelayClient {
    /// Create a relay with a default `reqwest` client.
    pub fn new(upstream_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), upstream_url)
    }

    /// Create a relay around an existing client.
    pub fn with_client(client: reqwest::Client, upstream_url: Url) -> Self {
        Self {
            client,
            upstream_url,
        }
    }

    /// The prediction endpoint this relay posts to.
    pub fn upstream_url(&self) -> &Url {
        &self.upstream_url
    }

    /// Forward one sample and return the upstream verdict.
    ///
    /// Makes exactly one attempt.
    pub async fn predict(&self, sample: &SoilSample) -> RelayResult<SoilHealthVerdict> {
        tracing::debug!(upstream = %self.upstream_url, "Relaying soil sample");

        let response = self
            .client
            .post(self.upstream_url.clone())
            .json(sample)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(upstream = %self.upstream_url, error = %e, "Upstream unreachable");
                RelayError::UpstreamUnavailable(e)
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(RelayError::UpstreamUnavailable)?;

        if !status.is_success() {
            tracing::warn!(upstream = %self.upstream_url, status = %status, "Upstream returned error status");
            return Err(ProtocolError::Status { status, body }.into());
        }

        let verdict = serde_json::from_str::<SoilHealthVerdict>(&body).map_err(|e| {
            tracing::warn!(upstream = %self.upstream_url, error = %e, "Upstream body is not a verdict");
            ProtocolError::Body(e)
        })?;

        tracing::debug!(prediction = %verdict.soil_health_prediction, "Upstream verdict received");
        Ok(verdict)
    }
}
