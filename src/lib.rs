//! Soil Health Relay Library
//!
//! ```text
//!     Caller                       Relay                       Prediction
//!       │   POST /soil-health/predict │                           service
//!       ├────────────────────────────▶│  http (decode SoilSample)   │
//!       │                             │  relay (POST JSON, once) ──▶│
//!       │                             │◀── SoilHealthVerdict ───────┤
//!       │◀──────── verdict JSON ──────┤                             │
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod soil;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::RelayClient;
pub use soil::{SoilHealthVerdict, SoilSample};
