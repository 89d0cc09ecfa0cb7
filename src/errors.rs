//! Unified error types for the till.
//!
//! Every error here is recoverable from the user's point of view: the CLI
//! reports the failure and stays usable. Persistence failures are additionally
//! absorbed inside the archive (see [`crate::storage::archive`]), so they only
//! surface from the low-level store operations themselves.

use thiserror::Error;

/// All failure modes of the till.
#[derive(Debug, Error)]
pub enum Error {
    /// A required form field was empty at save time.
    #[error("Required field is empty: {field}")]
    MissingField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The entered price does not parse as a finite non-negative amount.
    #[error("Price is not a valid amount: '{value}'")]
    InvalidPrice {
        /// The rejected input.
        value: String,
    },

    /// A price tier was requested for a service the catalog does not know.
    #[error("Unknown service: '{name}'")]
    UnknownService {
        /// The service name that failed the lookup.
        name: String,
    },

    /// A price tier index outside the suggested tiers for the service.
    #[error("No price tier {tier} for this service")]
    InvalidTier {
        /// The rejected 1-based tier index.
        tier: usize,
    },

    /// An export was requested while zero records match the filter.
    #[error("No records match the current filter; nothing to report")]
    EmptyReport,

    /// A storage read, write, or parse failure.
    #[error("Persistence error: {message}")]
    Persistence {
        /// Human-readable cause.
        message: String,
    },

    /// Report rendering or report file I/O failed.
    #[error("Report export error: {message}")]
    Export {
        /// Human-readable cause.
        message: String,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable cause.
        message: String,
    },

    /// Generic I/O error outside of storage and export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
