//! Observability subsystem.
//!
//! Structured log events via `tracing`; secrets never appear in fields.

pub mod logging;

pub use logging::{init_logging, LogFormat};
