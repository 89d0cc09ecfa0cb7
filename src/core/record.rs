//! The service record - one completed transaction at the till.

use serde::{Deserialize, Serialize};

/// One completed service, as saved from the entry form.
///
/// All four fields are non-empty at creation time and the record is immutable
/// afterwards; the only way a record disappears is the bulk clear. `price` is
/// kept as entered (a decimal number in text form) because display and
/// persistence both use the original string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Barber who performed the service
    pub barber: String,
    /// Local wall-clock save time, `HH:MM`
    pub time: String,
    /// Name of the performed service
    pub service: String,
    /// Price as entered, without currency suffix
    pub price: String,
}
