//! HTTP ingress subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace layer, graceful shutdown)
//!     → predict.rs (decode SoilSample, call the relay)
//!     → error.rs (map failures to status codes)
//!     → Send to client
//! ```

pub mod error;
pub mod predict;
pub mod server;

pub use error::ApiError;
pub use predict::PREDICT_PATH;
pub use server::{AppState, HttpServer};
