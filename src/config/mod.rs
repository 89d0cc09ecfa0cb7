//! Configuration loading for the till.
//!
//! The catalog (barbers, services, price tiers) and the report strings are
//! static configuration, not behavior: both carry compiled-in defaults that
//! reproduce the shop's fixtures and can be overridden from `config.toml`.

/// Service catalog - barbers, services, and suggested price tiers
pub mod catalog;

/// Report strings - titles, labels, month names, and transliteration rules
pub mod report;

pub use catalog::{Catalog, ServiceEntry};
pub use report::{ReportStrings, TranslitPair};

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Default location of the optional configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file.
///
/// Every section is optional; missing sections fall back to the compiled-in
/// defaults so the till runs with no configuration file at all.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Barbers, services, and suggested price tiers
    pub catalog: Catalog,
    /// Strings used by the report formatter
    pub report: ReportStrings,
}

/// Loads the application configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the application configuration, falling back to built-in defaults.
///
/// An explicitly given path must exist and parse. Without one, the default
/// `config.toml` is used when present; otherwise the compiled-in catalog and
/// report strings apply.
pub fn load_app_configuration(path: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = path {
        return load_config(path);
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        load_config(DEFAULT_CONFIG_PATH)
    } else {
        info!("No config.toml found, using the built-in catalog");
        Ok(AppConfig::default())
    }
}
