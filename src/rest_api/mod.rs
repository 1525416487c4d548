//! # Persona REST API Module
//!
//! CRUD handlers over the persona store, the uniform response envelope, and
//! the translation of every failure into that envelope.

pub mod errors;
pub mod handler;
pub mod response;
pub mod server;

pub use errors::{RestError, RestResult};
pub use handler::{InMemoryPersonaHandler, PersonaHandler};
pub use response::{ApiResponse, Reply};
pub use server::RestServer;
