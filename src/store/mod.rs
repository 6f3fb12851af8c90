//! Ordered record collection with write-through persistence.

mod storage;

pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage};

use crate::errors::AppResult;
use crate::models::record::Record;

/// Key under which the whole collection is persisted.
pub const STORAGE_KEY: &str = "production_data";

pub struct RecordStore<S: KeyValueStorage> {
    storage: S,
    records: Vec<Record>,
}

impl<S: KeyValueStorage> RecordStore<S> {
    /// Restore the collection from storage.
    ///
    /// A missing or unparseable value yields an empty collection; only a
    /// failing storage backend is reported as an error.
    pub fn load(storage: S) -> AppResult<Self> {
        let records = match storage.get(STORAGE_KEY)? {
            Some(raw) => serde_json::from_str::<Vec<Record>>(&raw).unwrap_or_default(),
            None => Vec::new(),
        };

        Ok(Self { storage, records })
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Append and persist the whole collection.
    pub fn add(&mut self, record: Record) -> AppResult<()> {
        self.records.push(record);
        self.persist()
    }

    /// Remove the record with `id`. Returns whether a record was removed;
    /// the collection is persisted in both cases.
    pub fn delete(&mut self, id: i64) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        self.persist()?;
        Ok(removed)
    }

    /// Id for a new record: the clock value, bumped past the largest stored id.
    pub fn next_id(&self, now_millis: i64) -> i64 {
        match self.records.iter().map(|r| r.id).max() {
            Some(max) if now_millis <= max => max + 1,
            _ => now_millis,
        }
    }

    fn persist(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.records)?;
        self.storage.set(STORAGE_KEY, &json)
    }
}
