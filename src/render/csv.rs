//! CSV renderer.
//!
//! Writes the report as one flat table: header row, one row per record, and
//! the total row last with its label in the first column. Title, date, and
//! footer are page furniture and have no place in a CSV; spreadsheet users
//! get the grid.

use crate::core::report::Report;
use crate::errors::{Error, Result};
use crate::render::DocumentRenderer;
use std::io::Write;

/// CSV document renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl DocumentRenderer for CsvRenderer {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        fn write_row<W: Write>(writer: &mut csv::Writer<W>, row: &[String; 4]) -> Result<()> {
            writer.write_record(row).map_err(|e| Error::Export {
                message: format!("Failed to write CSV row: {e}"),
            })
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);

        write_row(&mut writer, &report.columns)?;
        for row in &report.rows {
            write_row(&mut writer, row)?;
        }
        write_row(
            &mut writer,
            &[
                report.total_label.clone(),
                String::new(),
                String::new(),
                report.total_value.clone(),
            ],
        )?;

        writer.flush().map_err(|e| Error::Export {
            message: format!("Failed to flush CSV output: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_report;

    #[test]
    fn test_csv_layout() {
        let report = sample_report();
        let mut out = Vec::new();
        CsvRenderer.render(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        // Header + three records + total row
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Berber,Saat,Hizmet,Fiyat");
        assert!(lines[1].starts_with("Berber 1,"));
        assert_eq!(lines[4], format!("{},,,{}", report.total_label, report.total_value));
    }

    #[test]
    fn test_csv_quotes_embedded_commas() {
        let mut report = sample_report();
        report.rows[0][2] = "Sac, Sakal".to_string();

        let mut out = Vec::new();
        CsvRenderer.render(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Sac, Sakal\""));
    }
}
