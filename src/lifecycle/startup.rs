//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the relay client from the validated config
//! - Bind the listener and begin accepting traffic
//! - Serve until the shutdown coordinator fires

use std::io;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::validation::{parse_upstream_url, ValidationError};
use crate::config::RelayConfig;
use crate::http::HttpServer;
use crate::relay::RelayClient;

/// Fatal errors during startup or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid upstream configuration: {0}")]
    Upstream(#[from] ValidationError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

/// Start the relay and serve until `shutdown_rx` fires.
///
/// Subscribe before any task can trigger shutdown.
pub async fn run(
    config: RelayConfig,
    shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    let upstream_url = parse_upstream_url(&config.upstream.url)?;
    let relay = RelayClient::new(upstream_url);
    let server = HttpServer::new(config, relay);

    let bind_address = server.config().listener.bind_address.clone();
    tracing::info!(
        bind_address = %bind_address,
        upstream = %server.config().upstream.url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    server
        .run(listener, shutdown_rx)
        .await
        .map_err(StartupError::Serve)
}
