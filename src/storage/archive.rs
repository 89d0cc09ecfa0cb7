//! The record archive - persistence adapter for the record sequence.
//!
//! The whole sequence is serialized as one JSON array under a single fixed
//! key. Every operation is fail-soft: absent or corrupt data loads as an
//! empty sequence, and failed writes are logged and swallowed so the till
//! stays usable. Callers that need the failure get it from the underlying
//! [`KeyValueStore`] directly.

use crate::core::record::ServiceRecord;
use crate::storage::kv::KeyValueStore;
use tracing::{error, warn};

/// Fixed key the record sequence is stored under.
pub const RECORDS_KEY: &str = "barber_shop_records";

/// Loads and saves the record sequence through a key-value store.
pub struct RecordArchive {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for RecordArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordArchive")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl RecordArchive {
    /// Creates an archive over `store` using the fixed [`RECORDS_KEY`].
    #[must_use]
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_key(store, RECORDS_KEY)
    }

    /// Creates an archive over `store` using a custom key.
    pub fn with_key(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Reads the stored sequence.
    ///
    /// An absent value, a storage failure, or malformed JSON all yield an
    /// empty sequence; the two failure cases are logged.
    #[must_use]
    pub fn load(&self) -> Vec<ServiceRecord> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read saved records: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Error parsing saved records: {e}");
                Vec::new()
            }
        }
    }

    /// Replaces the stored sequence with `records`.
    ///
    /// Serialization or storage failures are logged, never propagated.
    pub fn save(&mut self, records: &[ServiceRecord]) {
        let raw = match serde_json::to_string(records) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to serialize records: {e}");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &raw) {
            error!("Failed to save records: {e}");
        }
    }

    /// Removes the stored sequence entirely.
    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove(&self.key) {
            error!("Failed to clear saved records: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::storage::kv::MemoryStore;
    use crate::test_utils::sample_record;

    fn memory_archive() -> RecordArchive {
        RecordArchive::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_load_absent_value_is_empty() {
        let archive = memory_archive();
        assert!(archive.load().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut archive = memory_archive();
        let records = vec![
            sample_record("Berber 1", "Saç Kesimi", "250"),
            sample_record("Berber 2", "Tıraş", "150"),
        ];

        archive.save(&records);
        assert_eq!(archive.load(), records);
    }

    #[test]
    fn test_corrupt_value_loads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(RECORDS_KEY, "not json at all").unwrap();

        let archive = RecordArchive::new(Box::new(store));
        assert!(archive.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(RECORDS_KEY, r#"{"barber":"Berber 1"}"#).unwrap();

        let archive = RecordArchive::new(Box::new(store));
        assert!(archive.load().is_empty());
    }

    #[test]
    fn test_clear_removes_value() {
        let mut archive = memory_archive();
        archive.save(&[sample_record("Berber 1", "Tıraş", "150")]);
        assert_eq!(archive.load().len(), 1);

        archive.clear();
        assert!(archive.load().is_empty());
    }

    #[test]
    fn test_custom_key() {
        let mut archive = RecordArchive::with_key(Box::new(MemoryStore::new()), "other_key");
        archive.save(&[sample_record("Berber 3", "Saç Boyama", "450")]);
        assert_eq!(archive.load().len(), 1);
    }
}
