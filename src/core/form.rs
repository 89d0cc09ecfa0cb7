//! The entry form - validation and record creation.
//!
//! The form holds the three pending selections, validates them, stamps the
//! local save time, and appends the resulting record through the record
//! store. It has exactly two states: *editing* while fields are being
//! populated, and *idle-after-save* once a save succeeded and the fields were
//! cleared. A failed validation keeps the form in *editing* and changes no
//! state anywhere else.

use crate::config::catalog::Catalog;
use crate::core::record::ServiceRecord;
use crate::core::store::RecordStore;
use crate::errors::{Error, Result};
use chrono::Local;

/// Lifecycle state of the entry form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    /// Fields are being populated
    #[default]
    Editing,
    /// A save succeeded and the fields were cleared
    IdleAfterSave,
}

/// The entry form for one pending record.
#[derive(Debug)]
pub struct EntryForm<'a> {
    catalog: &'a Catalog,
    barber: String,
    service: String,
    price: String,
    state: FormState,
}

impl<'a> EntryForm<'a> {
    /// Creates an empty form over the given catalog.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            barber: String::new(),
            service: String::new(),
            price: String::new(),
            state: FormState::Editing,
        }
    }

    /// Selects the barber.
    pub fn set_barber(&mut self, barber: impl Into<String>) {
        self.barber = barber.into();
        self.state = FormState::Editing;
    }

    /// Selects the service.
    pub fn set_service(&mut self, service: impl Into<String>) {
        self.service = service.into();
        self.state = FormState::Editing;
    }

    /// Enters the price directly.
    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
        self.state = FormState::Editing;
    }

    /// Picks the `tier`-th (1-based) suggested price for the selected
    /// service, the quick-select path of the form.
    pub fn select_tier(&mut self, tier: usize) -> Result<()> {
        if self.service.is_empty() {
            return Err(Error::MissingField { field: "service" });
        }
        let tiers = self
            .catalog
            .price_suggestions(&self.service)
            .ok_or_else(|| Error::UnknownService {
                name: self.service.clone(),
            })?;
        let price = tiers
            .get(tier.wrapping_sub(1))
            .ok_or(Error::InvalidTier { tier })?;
        self.set_price(price.clone());
        Ok(())
    }

    /// Suggested price tiers for the selected service.
    #[must_use]
    pub fn price_suggestions(&self) -> Option<&[String]> {
        self.catalog.price_suggestions(&self.service)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Checks that every field is filled and the price is a usable amount.
    ///
    /// Field checks mirror the form's completion rule (all three non-empty);
    /// the price must additionally parse as a finite non-negative number so
    /// that no record can poison the aggregate total at creation time.
    pub fn validate(&self) -> Result<()> {
        if self.barber.is_empty() {
            return Err(Error::MissingField { field: "barber" });
        }
        if self.service.is_empty() {
            return Err(Error::MissingField { field: "service" });
        }
        if self.price.is_empty() {
            return Err(Error::MissingField { field: "price" });
        }

        match self.price.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(()),
            _ => Err(Error::InvalidPrice {
                value: self.price.clone(),
            }),
        }
    }

    /// Validates, stamps the current local time, appends the record, and
    /// resets the fields.
    ///
    /// Returns the saved record. On a validation error nothing changes: the
    /// store is untouched and the form stays in *editing*.
    pub fn save(&mut self, store: &mut RecordStore) -> Result<ServiceRecord> {
        self.validate()?;

        let record = ServiceRecord {
            barber: std::mem::take(&mut self.barber),
            time: Local::now().format("%H:%M").to_string(),
            service: std::mem::take(&mut self.service),
            price: std::mem::take(&mut self.price),
        };
        store.append(record.clone());
        self.state = FormState::IdleAfterSave;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::open_memory_store;

    fn filled_form(catalog: &Catalog) -> EntryForm<'_> {
        let mut form = EntryForm::new(catalog);
        form.set_barber("Berber 1");
        form.set_service("Saç Kesimi");
        form.set_price("250");
        form
    }

    #[test]
    fn test_validate_missing_fields() {
        let catalog = Catalog::default();
        let mut store = open_memory_store();

        let mut form = EntryForm::new(&catalog);
        assert!(matches!(
            form.save(&mut store),
            Err(Error::MissingField { field: "barber" })
        ));

        form.set_barber("Berber 1");
        assert!(matches!(
            form.save(&mut store),
            Err(Error::MissingField { field: "service" })
        ));

        form.set_service("Tıraş");
        assert!(matches!(
            form.save(&mut store),
            Err(Error::MissingField { field: "price" })
        ));

        // No failed attempt touched the store or left editing state
        assert!(store.is_empty());
        assert_eq!(form.state(), FormState::Editing);
    }

    #[test]
    fn test_validate_rejects_bad_prices() {
        let catalog = Catalog::default();
        let mut store = open_memory_store();

        for bad in ["abc", "-50", "NaN", "inf"] {
            let mut form = filled_form(&catalog);
            form.set_price(bad);
            assert!(
                matches!(form.save(&mut store), Err(Error::InvalidPrice { .. })),
                "price '{bad}' should be rejected"
            );
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_appends_and_resets() {
        let catalog = Catalog::default();
        let mut store = open_memory_store();
        let mut form = filled_form(&catalog);

        let record = form.save(&mut store).unwrap();
        assert_eq!(record.barber, "Berber 1");
        assert_eq!(record.service, "Saç Kesimi");
        assert_eq!(record.price, "250");

        // Time is stamped as HH:MM, 24-hour
        assert_eq!(record.time.len(), 5);
        assert_eq!(record.time.as_bytes()[2], b':');

        assert_eq!(store.records(), [record]);
        assert_eq!(form.state(), FormState::IdleAfterSave);

        // Fields were reset, so an immediate re-save is incomplete again
        assert!(matches!(
            form.save(&mut store),
            Err(Error::MissingField { field: "barber" })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_editing_resumes_after_save() {
        let catalog = Catalog::default();
        let mut store = open_memory_store();
        let mut form = filled_form(&catalog);
        form.save(&mut store).unwrap();
        assert_eq!(form.state(), FormState::IdleAfterSave);

        form.set_barber("Berber 2");
        assert_eq!(form.state(), FormState::Editing);
    }

    #[test]
    fn test_select_tier() {
        let catalog = Catalog::default();
        let mut form = EntryForm::new(&catalog);

        // Tier selection needs a service first
        assert!(matches!(
            form.select_tier(1),
            Err(Error::MissingField { field: "service" })
        ));

        form.set_service("Tıraş");
        form.select_tier(2).unwrap();
        let mut store = open_memory_store();
        form.set_barber("Berber 2");
        let record = form.save(&mut store).unwrap();
        assert_eq!(record.price, "200");
    }

    #[test]
    fn test_select_tier_out_of_range() {
        let catalog = Catalog::default();
        let mut form = EntryForm::new(&catalog);
        form.set_service("Tıraş");

        assert!(matches!(
            form.select_tier(0),
            Err(Error::InvalidTier { tier: 0 })
        ));
        assert!(matches!(
            form.select_tier(4),
            Err(Error::InvalidTier { tier: 4 })
        ));
    }

    #[test]
    fn test_select_tier_unknown_service() {
        let catalog = Catalog::default();
        let mut form = EntryForm::new(&catalog);
        form.set_service("Masaj");

        assert!(matches!(
            form.select_tier(1),
            Err(Error::UnknownService { .. })
        ));
    }

    #[test]
    fn test_day_flow_save_filter_total() {
        use crate::core::filter::{self, BarberFilter};

        let catalog = Catalog::default();
        let mut store = open_memory_store();

        let mut form = EntryForm::new(&catalog);
        form.set_barber("Berber 1");
        form.set_service("Saç Kesimi");
        form.set_price("250");
        form.save(&mut store).unwrap();

        form.set_barber("Berber 2");
        form.set_service("Tıraş");
        form.set_price("150");
        form.save(&mut store).unwrap();

        let one = filter::filtered(
            store.records(),
            &BarberFilter::Barber("Berber 1".to_string()),
        );
        assert_eq!(one.len(), 1);
        assert_eq!(filter::format_total(filter::total(&one)), "250.00");

        let all = filter::filtered(store.records(), &BarberFilter::All);
        assert_eq!(all.len(), 2);
        assert_eq!(filter::format_total(filter::total(&all)), "400.00");
    }

    #[test]
    fn test_price_suggestions_follow_service() {
        let catalog = Catalog::default();
        let mut form = EntryForm::new(&catalog);
        assert!(form.price_suggestions().is_none());

        form.set_service("Saç Boyama");
        assert_eq!(
            form.price_suggestions().unwrap(),
            ["450", "550", "650"]
        );
    }
}
