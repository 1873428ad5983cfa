//! Observability subsystem.
//!
//! Logging only: every subsystem emits `tracing` events with structured
//! fields, and `logging.rs` installs the subscriber that writes them.

pub mod logging;

pub use logging::init_logging;
