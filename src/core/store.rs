//! The record store - the till's single mutable resource.
//!
//! Holds the day's records in insertion order and keeps the persisted
//! sequence equal to the in-memory one: every mutation is followed
//! synchronously by the matching archive operation (write-through, no
//! debouncing). The store is created once at startup and passed by reference
//! to the form and filter layers.

use crate::core::record::ServiceRecord;
use crate::storage::archive::RecordArchive;

/// Ordered sequence of service records with write-through persistence.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<ServiceRecord>,
    archive: RecordArchive,
}

impl RecordStore {
    /// Opens the store, loading whatever the archive holds.
    ///
    /// The initial load is the save's mirror image and does not itself
    /// trigger a save.
    #[must_use]
    pub fn open(archive: RecordArchive) -> Self {
        let records = archive.load();
        let mut store = Self {
            records: Vec::new(),
            archive,
        };
        store.replace_all(records);
        store
    }

    /// Appends one record and persists the new full sequence.
    pub fn append(&mut self, record: ServiceRecord) {
        self.records.push(record);
        self.archive.save(&self.records);
    }

    /// Replaces the whole sequence without persisting.
    ///
    /// Used only to mirror a load from the archive into memory.
    pub fn replace_all(&mut self, records: Vec<ServiceRecord>) {
        self.records = records;
    }

    /// Empties the sequence and removes the persisted value.
    pub fn clear(&mut self) {
        self.records.clear();
        self.archive.clear();
    }

    /// The records in save order.
    #[must_use]
    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    /// Number of saved records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records have been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
