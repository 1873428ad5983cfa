//! Upstream prediction service relay.
//!
//! # Data Flow
//! ```text
//! SoilSample
//!     → client.rs (serialize, POST once to the configured URL)
//!     → upstream prediction service
//!     → client.rs (status check, decode SoilHealthVerdict)
//!     → error.rs on any failure (no retry, no fallback)
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound call per inbound request
//! - No timeout is configured; the reqwest default applies
//! - Transient and permanent failures are reported the same way

pub mod client;
pub mod error;

pub use client::RelayClient;
pub use error::{ProtocolError, RelayError, RelayResult};
