//! # Persona Handlers
//!
//! One operation per CRUD verb plus a health check. Create and update
//! validate their payload before touching the store, so a rejected request
//! never leaves a partial change behind.

use std::sync::Arc;

use crate::model::{validate, PersonaId, PersonaPayload, PersonaRecord};
use crate::store::PersonaStore;

use super::errors::{RestError, RestResult};
use super::response::Reply;

/// Persona operations behind the HTTP routes
pub trait PersonaHandler: Send + Sync {
    /// List every persona
    fn list(&self) -> RestResult<Reply<Vec<PersonaRecord>>>;

    /// Get a single persona by id
    fn get(&self, id: PersonaId) -> RestResult<Reply<PersonaRecord>>;

    /// Create a persona
    fn create(&self, payload: PersonaPayload) -> RestResult<Reply<PersonaRecord>>;

    /// Replace the fields of an existing persona
    fn update(&self, id: PersonaId, payload: PersonaPayload) -> RestResult<Reply<PersonaRecord>>;

    /// Delete a persona, echoing its id
    fn delete(&self, id: PersonaId) -> RestResult<Reply<String>>;

    /// Liveness plus the current record count
    fn health(&self) -> RestResult<Reply<()>>;
}

/// Handler backed by the in-memory store
pub struct InMemoryPersonaHandler {
    store: Arc<PersonaStore>,
}

impl InMemoryPersonaHandler {
    pub fn new(store: Arc<PersonaStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<PersonaStore> {
        &self.store
    }
}

impl Default for InMemoryPersonaHandler {
    fn default() -> Self {
        Self::new(Arc::new(PersonaStore::new()))
    }
}

impl PersonaHandler for InMemoryPersonaHandler {
    fn list(&self) -> RestResult<Reply<Vec<PersonaRecord>>> {
        let records = self.store.list_all()?;
        Ok(Reply::ok("Persona list retrieved successfully", records))
    }

    fn get(&self, id: PersonaId) -> RestResult<Reply<PersonaRecord>> {
        let record = self.store.find_by_id(id)?.ok_or(RestError::NotFound(id))?;
        Ok(Reply::ok("Persona found", record))
    }

    fn create(&self, payload: PersonaPayload) -> RestResult<Reply<PersonaRecord>> {
        let persona = validate(&payload)?;

        let record = self.store.insert(persona)?;
        Ok(Reply::created(
            format!("Persona created successfully with ID: {}", record.id),
            record,
        ))
    }

    fn update(&self, id: PersonaId, payload: PersonaPayload) -> RestResult<Reply<PersonaRecord>> {
        let persona = validate(&payload)?;

        let record = self
            .store
            .update(id, persona)?
            .ok_or(RestError::NotFound(id))?;
        Ok(Reply::ok("Persona updated successfully", record))
    }

    fn delete(&self, id: PersonaId) -> RestResult<Reply<String>> {
        if !self.store.delete(id)? {
            return Err(RestError::NotFound(id));
        }
        Ok(Reply::ok("Persona deleted successfully", format!("ID: {}", id)))
    }

    fn health(&self) -> RestResult<Reply<()>> {
        let count = self.store.count()?;
        Ok(Reply::ok_message(format!(
            "REST API running correctly. Registered personas: {}",
            count
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn create_test_handler() -> InMemoryPersonaHandler {
        InMemoryPersonaHandler::default()
    }

    #[test]
    fn test_fresh_handler() {
        let handler = create_test_handler();

        let list = handler.list().unwrap();
        assert_eq!(list.body.data, Some(vec![]));

        let health = handler.health().unwrap();
        assert_eq!(
            health.body.message,
            "REST API running correctly. Registered personas: 0"
        );
    }

    #[test]
    fn test_create_and_get() {
        let handler = create_test_handler();

        let created = handler.create(PersonaPayload::new("Juan Pérez", 30)).unwrap();
        assert_eq!(created.status, StatusCode::CREATED);
        assert_eq!(
            created.body.message,
            "Persona created successfully with ID: 1"
        );

        let found = handler.get(1).unwrap();
        assert_eq!(found.body.data, created.body.data);
    }

    #[test]
    fn test_invalid_create_does_not_touch_store() {
        let handler = create_test_handler();

        let result = handler.create(PersonaPayload::new("", 25));
        assert!(matches!(result, Err(RestError::Validation(ref f)) if f.contains("name")));
        assert_eq!(handler.store().count().unwrap(), 0);

        // The id counter did not move either
        let created = handler.create(PersonaPayload::new("Ana", 25)).unwrap();
        assert_eq!(created.body.data.unwrap().id, 1);
    }

    #[test]
    fn test_update() {
        let handler = create_test_handler();
        handler.create(PersonaPayload::new("Original", 20)).unwrap();

        let updated = handler.update(1, PersonaPayload::new("Updated", 21)).unwrap();
        let record = updated.body.data.unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "Updated");
        assert_eq!(record.age, 21);
    }

    #[test]
    fn test_update_validates_before_lookup() {
        let handler = create_test_handler();

        let result = handler.update(99, PersonaPayload::new("X", 20));
        assert!(matches!(result, Err(RestError::Validation(_))));

        let result = handler.update(99, PersonaPayload::new("Valid", 20));
        assert!(matches!(result, Err(RestError::NotFound(99))));
    }

    #[test]
    fn test_delete() {
        let handler = create_test_handler();
        handler.create(PersonaPayload::new("To Delete", 40)).unwrap();

        let deleted = handler.delete(1).unwrap();
        assert_eq!(deleted.body.data.as_deref(), Some("ID: 1"));

        assert!(matches!(handler.get(1), Err(RestError::NotFound(1))));
        assert!(matches!(handler.delete(1), Err(RestError::NotFound(1))));
    }

    #[test]
    fn test_get_absent_ids() {
        let handler = create_test_handler();
        handler.create(PersonaPayload::new("Ana", 25)).unwrap();

        for id in [0, -1, 2, 999] {
            assert!(matches!(handler.get(id), Err(RestError::NotFound(n)) if n == id));
        }
    }
}
