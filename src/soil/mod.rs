//! Soil measurement and prediction payloads.
//!
//! # Data Flow
//! ```text
//! inbound JSON
//!     → SoilSample (decoded by the ingress handler)
//!     → relayed upstream as JSON, byte-for-byte the same fields
//!     → SoilHealthVerdict (decoded from the upstream reply)
//!     → outbound JSON to the caller
//! ```
//!
//! Both types live for a single request and are never mutated.

pub mod types;

pub use types::{SoilHealthVerdict, SoilSample};
