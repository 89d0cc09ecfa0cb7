//! Local persistence for the till.
//!
//! A [`kv::KeyValueStore`] holds string values under string keys; the
//! [`archive::RecordArchive`] serializes the whole record sequence as one
//! JSON array under a single fixed key, replaced wholesale on every
//! mutation.

/// Fail-soft archive of the record sequence under one key
pub mod archive;
/// Key-value store trait and its file-backed and in-memory implementations
pub mod kv;

pub use archive::{RECORDS_KEY, RecordArchive};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
