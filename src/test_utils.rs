//! Shared test utilities for `BerberKasa`.
//!
//! Common helpers for building in-memory stores, sample records, and a small
//! report with sensible defaults.

use crate::config::report::ReportStrings;
use crate::core::filter::{self, BarberFilter};
use crate::core::record::ServiceRecord;
use crate::core::report::{Report, build_report};
use crate::core::store::RecordStore;
use crate::storage::archive::RecordArchive;
use crate::storage::kv::MemoryStore;
use chrono::NaiveDate;

/// Creates a record store backed by a fresh in-memory key-value store.
/// This is the standard setup for store and form tests.
pub fn open_memory_store() -> RecordStore {
    RecordStore::open(RecordArchive::new(Box::new(MemoryStore::new())))
}

/// Creates a record with a fixed `10:30` save time.
pub fn sample_record(barber: &str, service: &str, price: &str) -> ServiceRecord {
    ServiceRecord {
        barber: barber.to_string(),
        time: "10:30".to_string(),
        service: service.to_string(),
        price: price.to_string(),
    }
}

/// Builds an unfiltered three-row report over the default strings.
///
/// # Panics
/// Panics if report building fails, which cannot happen for a non-empty
/// subset.
#[allow(clippy::unwrap_used)]
pub fn sample_report() -> Report {
    let records = vec![
        sample_record("Berber 1", "Saç Kesimi", "250"),
        sample_record("Berber 2", "Tıraş", "150"),
        sample_record("Berber 3", "Saç Boyama", "450.5"),
    ];
    let subset = filter::filtered(&records, &BarberFilter::All);
    let total = filter::total(&subset);
    let strings = ReportStrings::default();
    let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    build_report(&subset, total, &BarberFilter::All, date, &strings).unwrap()
}
