//! The in-memory record store.
//!
//! One [`RecordStore`] exists per session. It is created empty, mutated by
//! explicit operations, and dropped with the session; nothing persists.
//! All operations are synchronous and atomic with respect to the store: a
//! failed add or update leaves it exactly as it was.

use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::model::StudentRecord;

/// Keyed collection of student records for one session.
///
/// Invariant: no two records share an identifier. Records are kept ordered
/// by id so listing and export are deterministic.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: BTreeMap<String, StudentRecord>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record.
    ///
    /// Fails with [`StoreError::DuplicateId`] when the identifier is
    /// already taken, or with a validation error when a field is empty or
    /// the age is zero. The existing contents are left untouched on any
    /// failure.
    pub fn add(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        grade: impl Into<String>,
    ) -> Result<(), StoreError> {
        let record = StudentRecord::new(id, name, age, grade)?;
        if self.records.contains_key(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        tracing::debug!(id = %record.id, "record added");
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Result<&StudentRecord, StoreError> {
        self.records
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Replace the mutable fields of an existing record.
    ///
    /// Fails with [`StoreError::NotFound`] when the id is absent; a
    /// missing id is never created by an update. Replacement fields go
    /// through the same validation as an add.
    pub fn update(
        &mut self,
        id: &str,
        name: impl Into<String>,
        age: u32,
        grade: impl Into<String>,
    ) -> Result<(), StoreError> {
        if !self.records.contains_key(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let record = StudentRecord::new(id, name, age, grade)?;
        tracing::debug!(id = %record.id, "record updated");
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    /// Remove a record, returning it.
    pub fn delete(&mut self, id: &str) -> Result<StudentRecord, StoreError> {
        let removed = self
            .records
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        tracing::debug!(id = %removed.id, "record deleted");
        Ok(removed)
    }

    /// Iterate over all records in ascending id order.
    pub fn list(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.values()
    }

    /// Remove all records unconditionally.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.records.len(), "store cleared");
        self.records.clear();
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` when a record with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_get_returns_same_fields() {
        let mut store = RecordStore::new();
        store.add("S1", "Alice", 20, "A").unwrap();

        let record = store.get("S1").unwrap();
        assert_eq!(record.id, "S1");
        assert_eq!(record.name, "Alice");
        assert_eq!(record.age, 20);
        assert_eq!(record.grade, "A");
    }

    #[test]
    fn duplicate_add_fails_and_keeps_original() {
        let mut store = RecordStore::new();
        store.add("S1", "Alice", 20, "A").unwrap();

        let err = store.add("S1", "Bob", 22, "B").unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("S1".to_string()));

        let record = store.get("S1").unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(record.age, 20);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_rejects_invalid_fields() {
        let mut store = RecordStore::new();
        assert!(store.add("S1", "", 20, "A").unwrap_err().is_validation());
        assert!(store.add("S1", "Alice", 0, "A").unwrap_err().is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = RecordStore::new();
        store.add("S1", "Alice", 20, "A").unwrap();

        let removed = store.delete("S1").unwrap();
        assert_eq!(removed.name, "Alice");
        assert_eq!(
            store.get("S1").unwrap_err(),
            StoreError::NotFound("S1".to_string())
        );
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut store = RecordStore::new();
        assert_eq!(
            store.delete("ghost").unwrap_err(),
            StoreError::NotFound("ghost".to_string())
        );
    }

    #[test]
    fn update_replaces_fields_but_not_id() {
        let mut store = RecordStore::new();
        store.add("S1", "Alice", 20, "A").unwrap();
        store.update("S1", "Alice Smith", 21, "B").unwrap();

        let record = store.get("S1").unwrap();
        assert_eq!(record.id, "S1");
        assert_eq!(record.name, "Alice Smith");
        assert_eq!(record.age, 21);
        assert_eq!(record.grade, "B");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_missing_does_not_create() {
        let mut store = RecordStore::new();
        let err = store.update("S1", "Alice", 20, "A").unwrap_err();
        assert_eq!(err, StoreError::NotFound("S1".to_string()));
        assert!(store.is_empty());
    }

    #[test]
    fn update_validates_replacement_fields() {
        let mut store = RecordStore::new();
        store.add("S1", "Alice", 20, "A").unwrap();

        let err = store.update("S1", "", 21, "B").unwrap_err();
        assert_eq!(err, StoreError::EmptyField("name"));

        // Failed update leaves the record as it was.
        assert_eq!(store.get("S1").unwrap().name, "Alice");
    }

    #[test]
    fn list_is_ordered_and_restartable() {
        let mut store = RecordStore::new();
        store.add("S2", "Bob", 22, "B").unwrap();
        store.add("S1", "Alice", 20, "A").unwrap();
        store.add("S3", "Cara", 21, "A").unwrap();

        let ids: Vec<&str> = store.list().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2", "S3"]);

        // A second pass yields the same sequence.
        let again: Vec<&str> = store.list().map(|r| r.id.as_str()).collect();
        assert_eq!(again, ids);
    }

    #[test]
    fn clear_empties_store() {
        let mut store = RecordStore::new();
        store.add("S1", "Alice", 20, "A").unwrap();
        store.add("S2", "Bob", 22, "B").unwrap();

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.list().count(), 0);

        // Clearing an already empty store is fine.
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn contains_tracks_lifecycle() {
        let mut store = RecordStore::new();
        assert!(!store.contains("S1"));
        store.add("S1", "Alice", 20, "A").unwrap();
        assert!(store.contains("S1"));
        store.delete("S1").unwrap();
        assert!(!store.contains("S1"));
    }
}
