//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Upstream URL must be an absolute http(s) URL
//! - Bind address must be `host:port` with a valid port
//! - Log level must be a known level
//!
//! Returns all validation errors, not just the first.

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid upstream url '{value}': {reason}")]
    InvalidUpstreamUrl { value: String, reason: String },

    #[error("upstream url '{value}' must use http or https, got '{scheme}'")]
    UnsupportedScheme { value: String, scheme: String },

    #[error("invalid bind address '{value}': {reason}")]
    InvalidBindAddress { value: String, reason: String },

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

/// Validate a loaded configuration.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = parse_upstream_url(&config.upstream.url) {
        errors.push(e);
    }
    if let Err(e) = check_bind_address(&config.listener.bind_address) {
        errors.push(e);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse the upstream endpoint, accepting only http and https.
pub fn parse_upstream_url(value: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(value).map_err(|e| ValidationError::InvalidUpstreamUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ValidationError::UnsupportedScheme {
                value: value.to_string(),
                scheme: other.to_string(),
            })
        }
    }

    if url.host_str().is_none() {
        return Err(ValidationError::InvalidUpstreamUrl {
            value: value.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}

fn check_bind_address(value: &str) -> Result<(), ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidBindAddress {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (host, port) = value.rsplit_once(':').ok_or_else(|| invalid("expected host:port"))?;
    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    port.parse::<u16>().map_err(|_| invalid("port must be 0-65535"))?;
    Ok(())
}
