//! Service catalog configuration.
//!
//! The catalog is the fixed set of choices the entry form offers: barber
//! names, service names, and three suggested price tiers per service. It is
//! data, not behavior - the defaults reproduce the shop's fixtures and any
//! part can be replaced from `config.toml`.

use serde::Deserialize;

/// A single service and its suggested price tiers.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceEntry {
    /// Display name of the service
    pub name: String,
    /// Suggested prices, cheapest first (three tiers by convention)
    pub price_tiers: Vec<String>,
}

/// The choices offered by the entry form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Barber names staff can select
    pub barbers: Vec<String>,
    /// Services with their suggested price tiers
    pub services: Vec<ServiceEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        let tiers = |prices: [&str; 3]| prices.iter().map(ToString::to_string).collect();
        Self {
            barbers: vec![
                "Berber 1".to_string(),
                "Berber 2".to_string(),
                "Berber 3".to_string(),
            ],
            services: vec![
                ServiceEntry {
                    name: "Saç Kesimi".to_string(),
                    price_tiers: tiers(["250", "300", "350"]),
                },
                ServiceEntry {
                    name: "Tıraş".to_string(),
                    price_tiers: tiers(["150", "200", "250"]),
                },
                ServiceEntry {
                    name: "Sakal Tıraşı".to_string(),
                    price_tiers: tiers(["100", "150", "200"]),
                },
                ServiceEntry {
                    name: "Saç Boyama".to_string(),
                    price_tiers: tiers(["450", "550", "650"]),
                },
            ],
        }
    }
}

impl Catalog {
    /// Returns the suggested price tiers for a service, or `None` when the
    /// catalog does not list it.
    #[must_use]
    pub fn price_suggestions(&self, service: &str) -> Option<&[String]> {
        self.services
            .iter()
            .find(|entry| entry.name == service)
            .map(|entry| entry.price_tiers.as_slice())
    }
}
