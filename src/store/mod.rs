//! # Persona Store
//!
//! The authoritative in-memory set of persona records and the id counter.
//! One instance is built at startup and shared by every request.

mod errors;
mod persona_store;

pub use errors::{StoreError, StoreResult};
pub use persona_store::PersonaStore;
