//! Persona entity types
//!
//! `PersonaPayload` is what clients send. `Persona` is a payload that has
//! passed validation. `PersonaRecord` is a persona with a store-assigned id.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store
pub type PersonaId = i64;

/// Request body for create and update
///
/// Both fields are optional on the wire so that a missing or `null` value is
/// reported as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaPayload {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub age: Option<i64>,
}

impl PersonaPayload {
    /// Create a payload with both fields set
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age),
        }
    }
}

/// A validated persona
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub age: u8,
}

/// A persona held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaRecord {
    pub id: PersonaId,
    pub name: String,
    pub age: u8,
}

impl PersonaRecord {
    pub fn new(id: PersonaId, persona: Persona) -> Self {
        Self {
            id,
            name: persona.name,
            age: persona.age,
        }
    }

    /// Overwrite the persona fields, keeping the id
    pub fn apply(&mut self, persona: Persona) {
        self.name = persona.name;
        self.age = persona.age;
    }
}
