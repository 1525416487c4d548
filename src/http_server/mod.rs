//! # Persona HTTP Server Module
//!
//! Wraps the persona routes in the transport concerns: base path nesting,
//! CORS, per-request tracing, panic recovery, and the fallback for unknown
//! routes.
//!
//! # Endpoints
//!
//! - `{base}/personas` - list and create
//! - `{base}/personas/{id}` - get, update, delete
//! - `{base}/personas/health` - health check

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{build_router, HttpServer};
