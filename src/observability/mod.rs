//! # Observability
//!
//! Structured logging through `tracing`. Request spans come from the
//! trace layer in `http_server`; this module installs the subscriber.

mod logging;

pub use logging::{init_logging, LoggingError, LoggingSettings};
