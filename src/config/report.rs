//! Report string configuration.
//!
//! Everything the report formatter prints that is not record data lives here:
//! title, column labels, currency suffix, footer, filename prefix, the month
//! names used for the long-form date, and the diacritic substitution pairs
//! applied to service names. Defaults reproduce the shop's report; tests can
//! substitute alternate tables.

use serde::Deserialize;

/// One diacritic substitution applied to service names in the report body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TranslitPair {
    /// Accented character to replace
    pub from: char,
    /// Closest ASCII letter
    pub to: char,
}

/// Strings used by the report formatter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportStrings {
    /// Report title line
    pub title: String,
    /// Prefix of the date line (`Tarih: ` in the default report)
    pub date_prefix: String,
    /// The four column labels: barber, time, service, price
    pub columns: [String; 4],
    /// Currency suffix appended to every price and to the total
    pub currency: String,
    /// Label of the total row; prefixed with the barber name when filtered
    pub total_label: String,
    /// Attribution line repeated on every page
    pub footer: String,
    /// Filename prefix; the localized date is appended with underscores
    pub file_prefix: String,
    /// Month names for the long-form localized date, January first
    pub month_names: [String; 12],
    /// Diacritic substitutions applied to service names
    pub transliterations: Vec<TranslitPair>,
}

impl Default for ReportStrings {
    fn default() -> Self {
        let pair = |from, to| TranslitPair { from, to };
        Self {
            title: "ODTU Berber - Gelir Raporu".to_string(),
            date_prefix: "Tarih: ".to_string(),
            columns: [
                "Berber".to_string(),
                "Saat".to_string(),
                "Hizmet".to_string(),
                "Fiyat".to_string(),
            ],
            currency: "TL".to_string(),
            total_label: "TOPLAM:".to_string(),
            footer: "© 2025 ODTU Berber - Eyyüpcan İşler".to_string(),
            file_prefix: "ODTU_Berber_Gelir_Raporu".to_string(),
            month_names: [
                "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos",
                "Eylül", "Ekim", "Kasım", "Aralık",
            ]
            .map(ToString::to_string),
            transliterations: vec![
                pair('ı', 'i'),
                pair('ğ', 'g'),
                pair('ü', 'u'),
                pair('ş', 's'),
                pair('ö', 'o'),
                pair('ç', 'c'),
                pair('İ', 'I'),
            ],
        }
    }
}
