//! Field validation for persona payloads
//!
//! Rules:
//! - `name`: required, not blank, 2 to 50 characters
//! - `age`: required, 0 to 150 inclusive
//!
//! Each field reports at most one message. Checks run from the most basic
//! (presence) to the most specific (range), and the first failure wins.

use std::collections::BTreeMap;

use serde::Serialize;

use super::persona::{Persona, PersonaPayload};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const AGE_MIN: i64 = 0;
pub const AGE_MAX: i64 = 150;

/// Field name to violation message
///
/// Keys are kept sorted so error bodies serialize deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation, replacing any earlier message for the field
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Validate a payload into a `Persona`
pub fn validate(payload: &PersonaPayload) -> Result<Persona, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = match check_name(payload.name.as_deref()) {
        Ok(name) => Some(name),
        Err(message) => {
            errors.insert("name", message);
            None
        }
    };

    let age = match check_age(payload.age) {
        Ok(age) => Some(age),
        Err(message) => {
            errors.insert("age", message);
            None
        }
    };

    match (name, age) {
        (Some(name), Some(age)) => Ok(Persona {
            name: name.to_string(),
            age,
        }),
        _ => Err(errors),
    }
}

fn check_name(name: Option<&str>) -> Result<&str, &'static str> {
    let name = name.ok_or("name must not be null")?;

    if name.trim().is_empty() {
        return Err("name must not be blank");
    }

    let chars = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Err("name must be between 2 and 50 characters");
    }

    Ok(name)
}

fn check_age(age: Option<i64>) -> Result<u8, &'static str> {
    let age = age.ok_or("age must not be null")?;

    if age < AGE_MIN {
        return Err("age must be greater than or equal to 0");
    }
    if age > AGE_MAX {
        return Err("age must be less than or equal to 150");
    }

    // 0..=150 always fits
    u8::try_from(age).map_err(|_| "age must be less than or equal to 150")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, age: Option<i64>) -> PersonaPayload {
        PersonaPayload {
            name: name.map(str::to_string),
            age,
        }
    }

    #[test]
    fn test_valid_persona() {
        let persona = validate(&PersonaPayload::new("Ana María", 25)).unwrap();
        assert_eq!(persona.name, "Ana María");
        assert_eq!(persona.age, 25);
    }

    #[test]
    fn test_null_name() {
        let errors = validate(&payload(None, Some(30))).unwrap_err();
        assert_eq!(errors.get("name"), Some("name must not be null"));
        assert!(!errors.contains("age"));
    }

    #[test]
    fn test_empty_and_blank_name() {
        let errors = validate(&PersonaPayload::new("", 30)).unwrap_err();
        assert_eq!(errors.get("name"), Some("name must not be blank"));

        let errors = validate(&PersonaPayload::new("    ", 30)).unwrap_err();
        assert_eq!(errors.get("name"), Some("name must not be blank"));
    }

    #[test]
    fn test_name_length_bounds() {
        let errors = validate(&PersonaPayload::new("A", 30)).unwrap_err();
        assert_eq!(
            errors.get("name"),
            Some("name must be between 2 and 50 characters")
        );

        assert!(validate(&PersonaPayload::new("Al", 30)).is_ok());
        assert!(validate(&PersonaPayload::new("x".repeat(50), 30)).is_ok());
        assert!(validate(&PersonaPayload::new("x".repeat(51), 30)).is_err());
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 50 two-byte characters
        assert!(validate(&PersonaPayload::new("é".repeat(50), 30)).is_ok());
        assert!(validate(&PersonaPayload::new("é", 30)).is_err());
    }

    #[test]
    fn test_age_rules() {
        let errors = validate(&payload(Some("Carlos"), None)).unwrap_err();
        assert_eq!(errors.get("age"), Some("age must not be null"));

        let errors = validate(&PersonaPayload::new("Diana", -1)).unwrap_err();
        assert_eq!(errors.get("age"), Some("age must be greater than or equal to 0"));

        let errors = validate(&PersonaPayload::new("Eduardo", 151)).unwrap_err();
        assert_eq!(errors.get("age"), Some("age must be less than or equal to 150"));

        let errors = validate(&PersonaPayload::new("Eduardo", i64::MAX)).unwrap_err();
        assert!(errors.contains("age"));
    }

    #[test]
    fn test_age_boundaries() {
        assert_eq!(validate(&PersonaPayload::new("Bebé", 0)).unwrap().age, 0);
        assert_eq!(validate(&PersonaPayload::new("Longevo", 150)).unwrap().age, 150);
    }

    #[test]
    fn test_both_fields_invalid() {
        let errors = validate(&payload(None, Some(200))).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["age", "name"]);
    }
}
