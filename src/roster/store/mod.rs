//! # Storage Layer
//!
//! This module defines the storage abstraction for roster. The [`DataStore`]
//! trait is the capability the rest of the library talks to; it knows nothing
//! about where bytes end up.
//!
//! ## Two Traits, Two Concerns
//!
//! - [`DataStore`]: CRUD over the whole record collection.
//! - [`backend::KeyValueBackend`]: raw string I/O under a key.
//!
//! [`KvDataStore`] is the one concrete `DataStore`. It keeps the entire
//! collection as a JSON array under a single key (`appData` unless
//! configured otherwise) of any key-value backend.
//!
//! ## Read-Modify-Write
//!
//! Every mutating call reads the full collection, transforms it, and writes
//! it back. There is no indexing and no partial update. The last writer
//! wins; callers are expected to be a single thread.
//!
//! ## Decode Failures
//!
//! A stored value that fails to decode is treated as an empty collection.
//! The failure is logged and never surfaced. The next write replaces it.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: `<data_dir>/<key>.json`, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! └── appData.json    # [ {"id": "...", "name": "...", ...}, ... ]
//! ```

use crate::error::Result;
use crate::model::Record;
use tracing::{debug, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

use backend::KeyValueBackend;
use fs_backend::FsBackend;
use mem_backend::MemBackend;

pub const DEFAULT_STORAGE_KEY: &str = "appData";

/// Abstract interface for record storage.
pub trait DataStore {
    /// Current collection, in insertion order. Empty when nothing is stored
    /// or the stored value cannot be decoded.
    fn get_data(&self) -> Vec<Record>;

    /// Replace the stored collection.
    fn set_data(&mut self, records: &[Record]) -> Result<()>;

    /// Append one record. Id uniqueness is the caller's job.
    fn add_data(&mut self, record: Record) -> Result<()> {
        let mut records = self.get_data();
        records.push(record);
        self.set_data(&records)
    }

    /// Replace the record whose id matches. No match leaves the collection
    /// unchanged.
    fn update_data(&mut self, record: Record) -> Result<()> {
        let records: Vec<Record> = self
            .get_data()
            .into_iter()
            .map(|item| if item.id == record.id { record.clone() } else { item })
            .collect();
        self.set_data(&records)
    }

    /// Remove the record with this id, if any.
    fn delete_data(&mut self, id: &str) -> Result<()> {
        let records: Vec<Record> = self
            .get_data()
            .into_iter()
            .filter(|item| item.id != id)
            .collect();
        self.set_data(&records)
    }
}

/// Stores the collection as one JSON array under a single key.
pub struct KvDataStore<B: KeyValueBackend> {
    backend: B,
    storage_key: String,
}

impl<B: KeyValueBackend> KvDataStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: KeyValueBackend> DataStore for KvDataStore<B> {
    fn get_data(&self) -> Vec<Record> {
        let raw = match self.backend.get_item(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "could not read stored records");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Record>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "stored records are malformed, starting empty");
                Vec::new()
            }
        }
    }

    fn set_data(&mut self, records: &[Record]) -> Result<()> {
        let encoded = serde_json::to_string(records)?;
        self.backend.set_item(&self.storage_key, &encoded)?;
        debug!(key = %self.storage_key, count = records.len(), "stored records");
        Ok(())
    }
}

/// The production store: JSON on disk.
pub type LocalStore = KvDataStore<FsBackend>;

/// Store used by tests and previews.
pub type InMemoryStore = KvDataStore<MemBackend>;

impl InMemoryStore {
    pub fn in_memory() -> Self {
        KvDataStore::new(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A valid record with a fixed id, handy for seeding stores.
    pub fn sample_record(id: &str, name: &str) -> Record {
        Record {
            id: id.to_string(),
            name: name.to_string(),
            phone: "1234567890".to_string(),
            email: "a@b.com".to_string(),
            dob: "1990-01-01".to_string(),
            age: 33,
            country: "USA".to_string(),
            state: "California".to_string(),
            city: "Los Angeles".to_string(),
            zip: "12345".to_string(),
            town: "Palo Alto".to_string(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::in_memory(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = sample_record(&format!("{}", i + 1), &format!("Person {}", i + 1));
                self.store.add_data(record).unwrap();
            }
            self
        }
    }
}
