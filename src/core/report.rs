//! Report building.
//!
//! Turns a filtered subset of records into a structured tabular report:
//! title, long-form date line, header row, one body row per record, a total
//! row, and the footer repeated on every page. The result is plain data,
//! ready to hand to any [`crate::render::DocumentRenderer`]; page layout is
//! the renderer's concern.

use crate::config::report::{ReportStrings, TranslitPair};
use crate::core::filter::{BarberFilter, format_total};
use crate::core::record::ServiceRecord;
use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate};

/// A fully formatted report, ready for a document renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Title line
    pub title: String,
    /// Long-form date line, e.g. `Tarih: 7 Ağustos 2026`
    pub date_line: String,
    /// The four column labels
    pub columns: [String; 4],
    /// One row per record: barber, time, transliterated service, price
    pub rows: Vec<[String; 4]>,
    /// Label of the total row; spans the first three columns when rendered
    pub total_label: String,
    /// Formatted total with currency suffix
    pub total_value: String,
    /// Attribution line repeated on every page
    pub footer: String,
    /// Output filename without extension; contains no spaces
    pub file_stem: String,
}

/// Replaces each configured accented character with its ASCII counterpart.
///
/// Applied to service names so the rendered document never depends on fonts
/// with Turkish glyph coverage.
#[must_use]
pub fn transliterate(input: &str, pairs: &[TranslitPair]) -> String {
    input
        .chars()
        .map(|c| {
            pairs
                .iter()
                .find(|pair| pair.from == c)
                .map_or(c, |pair| pair.to)
        })
        .collect()
}

/// Formats `date` long-form with the configured month names, `7 Ağustos 2026`
/// style.
#[must_use]
pub fn long_date(date: NaiveDate, strings: &ReportStrings) -> String {
    let month = &strings.month_names[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Builds the report for `subset` under `filter` on `date`.
///
/// # Errors
/// Returns [`Error::EmptyReport`] when the subset is empty; a degenerate
/// report is never produced.
pub fn build_report(
    subset: &[&ServiceRecord],
    total: f64,
    filter: &BarberFilter,
    date: NaiveDate,
    strings: &ReportStrings,
) -> Result<Report> {
    if subset.is_empty() {
        return Err(Error::EmptyReport);
    }

    let date_str = long_date(date, strings);

    let rows = subset
        .iter()
        .map(|record| {
            [
                record.barber.clone(),
                record.time.clone(),
                transliterate(&record.service, &strings.transliterations),
                format!("{} {}", record.price, strings.currency),
            ]
        })
        .collect();

    let total_label = match filter {
        BarberFilter::All => strings.total_label.clone(),
        BarberFilter::Barber(name) => format!("{name} {}", strings.total_label),
    };

    Ok(Report {
        title: strings.title.clone(),
        date_line: format!("{}{date_str}", strings.date_prefix),
        columns: strings.columns.clone(),
        rows,
        total_label,
        total_value: format!("{} {}", format_total(total), strings.currency),
        footer: strings.footer.clone(),
        file_stem: format!("{}_{}", strings.file_prefix, date_str.replace(' ', "_")),
    })
}
