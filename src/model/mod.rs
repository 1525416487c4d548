//! # Persona Model
//!
//! The persona entity, its stored form, and the field rules that every
//! submitted payload must satisfy before it reaches the store.

pub mod persona;
pub mod validation;

pub use persona::{Persona, PersonaId, PersonaPayload, PersonaRecord};
pub use validation::{validate, FieldErrors};
