//! Record filtering and price aggregation.
//!
//! The filter is a pure view parameter: it never changes the stored sequence
//! and resets to "all barbers" on every start. Totals are summed over the
//! filtered subset and formatted to two decimals for display and reporting.

use crate::core::record::ServiceRecord;

/// The barber selection used for the records table and the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BarberFilter {
    /// Every record, regardless of barber
    #[default]
    All,
    /// Only records of the named barber
    Barber(String),
}

impl BarberFilter {
    /// Builds a filter from an optional CLI argument; `None` or the literal
    /// `all` select every barber.
    #[must_use]
    pub fn from_arg(arg: Option<String>) -> Self {
        match arg {
            None => Self::All,
            Some(name) if name.eq_ignore_ascii_case("all") => Self::All,
            Some(name) => Self::Barber(name),
        }
    }

    /// Whether `record` passes this filter.
    #[must_use]
    pub fn matches(&self, record: &ServiceRecord) -> bool {
        match self {
            Self::All => true,
            Self::Barber(name) => record.barber == *name,
        }
    }
}

/// Returns the records passing `filter`, preserving original order.
#[must_use]
pub fn filtered<'a>(records: &'a [ServiceRecord], filter: &BarberFilter) -> Vec<&'a ServiceRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Sums the prices of `subset`.
///
/// A price that does not parse contributes NaN, which propagates into the
/// sum: records already in storage are aggregated as-is, and creation-time
/// validation is the place that rejects bad prices.
#[must_use]
pub fn total(subset: &[&ServiceRecord]) -> f64 {
    subset
        .iter()
        .map(|r| r.price.parse::<f64>().unwrap_or(f64::NAN))
        .sum()
}

/// Formats a total to exactly two decimal places.
#[must_use]
pub fn format_total(total: f64) -> String {
    format!("{total:.2}")
}
