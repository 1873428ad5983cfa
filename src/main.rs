use clap::Parser;
use std::path::PathBuf;

use soil_health_relay::config::{resolve_config, ConfigOverrides};
use soil_health_relay::lifecycle::{self, signals, Shutdown};
use soil_health_relay::observability;

/// Relay soil samples to an upstream prediction service.
#[derive(Parser)]
#[command(name = "soil-health-relay", version)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long, env = "SOIL_RELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Prediction service endpoint (overrides the config file).
    #[arg(long, env = "SOIL_RELAY_UPSTREAM_URL")]
    upstream_url: Option<String>,

    /// Listen address (overrides the config file).
    #[arg(long, env = "SOIL_RELAY_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let overrides = ConfigOverrides {
        upstream_url: args.upstream_url,
        bind_address: args.bind,
    };
    let config = resolve_config(args.config.as_deref(), &overrides)?;

    observability::init_logging(&config.observability)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "soil-health-relay starting");

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    lifecycle::run(config, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
