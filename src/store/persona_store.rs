//! In-memory persona store
//!
//! All operations, id allocation included, run under one mutex. Ids start
//! at 1 and are never reused, even after the record holding them is deleted.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::model::{Persona, PersonaId, PersonaRecord};

use super::errors::{StoreError, StoreResult};

#[derive(Debug, Default)]
struct StoreInner {
    records: Vec<PersonaRecord>,
    last_id: PersonaId,
}

impl StoreInner {
    fn next_id(&mut self) -> PersonaId {
        self.last_id += 1;
        self.last_id
    }

    fn position(&self, id: PersonaId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

/// Persona store
#[derive(Debug, Default)]
pub struct PersonaStore {
    inner: Mutex<StoreInner>,
}

impl PersonaStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, StoreInner>> {
        self.inner.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Reserve the next id
    pub fn allocate_id(&self) -> StoreResult<PersonaId> {
        Ok(self.lock()?.next_id())
    }

    /// Store a persona under a freshly allocated id
    pub fn insert(&self, persona: Persona) -> StoreResult<PersonaRecord> {
        let mut inner = self.lock()?;
        let id = inner.next_id();
        let record = PersonaRecord::new(id, persona);
        inner.records.push(record.clone());

        debug!(id, total = inner.records.len(), "persona inserted");
        Ok(record)
    }

    pub fn find_by_id(&self, id: PersonaId) -> StoreResult<Option<PersonaRecord>> {
        let inner = self.lock()?;
        Ok(inner.records.iter().find(|r| r.id == id).cloned())
    }

    /// Overwrite the fields of an existing record in place
    ///
    /// Returns `None` when no record has the id; the store is left untouched.
    pub fn update(&self, id: PersonaId, persona: Persona) -> StoreResult<Option<PersonaRecord>> {
        let mut inner = self.lock()?;
        let Some(record) = inner.records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        record.apply(persona);
        debug!(id, "persona updated");
        Ok(Some(record.clone()))
    }

    /// Remove a record, reporting whether one was removed
    pub fn delete(&self, id: PersonaId) -> StoreResult<bool> {
        let mut inner = self.lock()?;
        match inner.position(id) {
            Some(idx) => {
                inner.records.remove(idx);
                debug!(id, total = inner.records.len(), "persona deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// All records in insertion order
    pub fn list_all(&self) -> StoreResult<Vec<PersonaRecord>> {
        Ok(self.lock()?.records.clone())
    }

    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.lock()?.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona(name: &str, age: u8) -> Persona {
        Persona {
            name: name.to_string(),
            age,
        }
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let store = PersonaStore::new();
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_insert_and_find() {
        let store = PersonaStore::new();
        let record = store.insert(persona("Juan Pérez", 30)).unwrap();
        assert_eq!(record.id, 1);

        let found = store.find_by_id(1).unwrap().unwrap();
        assert_eq!(found, record);
        assert!(store.find_by_id(2).unwrap().is_none());
    }

    #[test]
    fn test_allocate_id_is_monotonic() {
        let store = PersonaStore::new();
        assert_eq!(store.allocate_id().unwrap(), 1);
        assert_eq!(store.allocate_id().unwrap(), 2);

        // Allocated ids are consumed even without a record
        let record = store.insert(persona("Ana", 25)).unwrap();
        assert_eq!(record.id, 3);
    }

    #[test]
    fn test_update_in_place() {
        let store = PersonaStore::new();
        store.insert(persona("Ana", 25)).unwrap();
        store.insert(persona("Luis", 40)).unwrap();

        let updated = store.update(1, persona("Ana María", 26)).unwrap().unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Ana María");

        // Position is preserved
        let all = store.list_all().unwrap();
        assert_eq!(all[0], updated);
        assert_eq!(all[1].name, "Luis");
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let store = PersonaStore::new();
        store.insert(persona("Ana", 25)).unwrap();
        let before = store.list_all().unwrap();

        assert!(store.update(99, persona("Nadie", 1)).unwrap().is_none());
        assert_eq!(store.list_all().unwrap(), before);
    }

    #[test]
    fn test_delete() {
        let store = PersonaStore::new();
        store.insert(persona("Juan Pérez", 30)).unwrap();
        store.insert(persona("Ana", 25)).unwrap();

        assert!(store.delete(1).unwrap());
        assert_eq!(store.count().unwrap(), 1);
        assert!(store.find_by_id(1).unwrap().is_none());
        assert!(store.find_by_id(2).unwrap().is_some());

        assert!(!store.delete(1).unwrap());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = PersonaStore::new();
        let first = store.insert(persona("Uno", 1)).unwrap();
        store.insert(persona("Dos", 2)).unwrap();
        store.delete(first.id).unwrap();

        let third = store.insert(persona("Tres", 3)).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = PersonaStore::new();
        for (i, name) in ["Ana", "Bea", "Carla"].iter().enumerate() {
            store.insert(persona(name, i as u8)).unwrap();
        }

        let names: Vec<_> = store.list_all().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Ana", "Bea", "Carla"]);
    }
}
