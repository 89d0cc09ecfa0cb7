//! Paginated plain-text grid renderer.
//!
//! Lays the report out as an ASCII grid table on fixed-height pages: title
//! and date on the first page, the header row repeated on every page, the
//! total row after the last body row, and the footer at the bottom of every
//! page. Pages are separated by a form feed. Barber and service columns are
//! left-aligned, time centered, price right.

use crate::core::report::Report;
use crate::errors::Result;
use crate::render::DocumentRenderer;
use std::io::Write;

/// Body rows per page.
const DEFAULT_ROWS_PER_PAGE: usize = 30;

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

const COLUMN_ALIGNMENTS: [Align; 4] = [Align::Left, Align::Center, Align::Left, Align::Right];

/// Plain-text document renderer.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    rows_per_page: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, target: usize, align: Align) -> String {
    let gap = target.saturating_sub(width(text));
    match align {
        Align::Left => format!("{text}{}", " ".repeat(gap)),
        Align::Right => format!("{}{text}", " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}

impl TextRenderer {
    /// Creates a renderer with a custom page height, in body rows.
    #[must_use]
    pub fn with_rows_per_page(rows_per_page: usize) -> Self {
        Self {
            rows_per_page: rows_per_page.max(1),
        }
    }

    fn column_widths(report: &Report) -> [usize; 4] {
        let mut widths = report.columns.each_ref().map(|label| width(label));
        for row in &report.rows {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(width(cell));
            }
        }
        // The price column also carries the total value
        widths[3] = widths[3].max(width(&report.total_value));
        // The first three columns merge under the total label
        let span = widths[0] + widths[1] + widths[2] + 6;
        if span < width(&report.total_label) {
            widths[2] += width(&report.total_label) - span;
        }
        widths
    }

    fn divider(widths: &[usize; 4]) -> String {
        let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+", segments.join("+"))
    }

    fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .zip(COLUMN_ALIGNMENTS.iter())
            .map(|((cell, w), align)| pad(cell, *w, *align))
            .collect();
        format!("| {} |", padded.join(" | "))
    }

    fn format_total_row(report: &Report, widths: &[usize; 4]) -> String {
        let span = widths[0] + widths[1] + widths[2] + 6;
        format!(
            "| {} | {} |",
            pad(&report.total_label, span, Align::Right),
            pad(&report.total_value, widths[3], Align::Right),
        )
    }

    fn table_width(widths: &[usize; 4]) -> usize {
        widths.iter().sum::<usize>() + 13
    }
}

impl DocumentRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        let widths = Self::column_widths(report);
        let divider = Self::divider(&widths);
        let total_width = Self::table_width(&widths);

        let pages: Vec<&[[String; 4]]> = report.rows.chunks(self.rows_per_page).collect();
        let last_page = pages.len().saturating_sub(1);

        for (page_index, page_rows) in pages.iter().enumerate() {
            if page_index > 0 {
                writeln!(out, "\u{c}")?;
            } else {
                writeln!(out, "{}", pad(&report.title, total_width, Align::Center))?;
                writeln!(out, "{}", pad(&report.date_line, total_width, Align::Center))?;
                writeln!(out)?;
            }

            writeln!(out, "{divider}")?;
            writeln!(out, "{}", Self::format_row(&report.columns, &widths))?;
            writeln!(out, "{divider}")?;
            for row in *page_rows {
                writeln!(out, "{}", Self::format_row(row, &widths))?;
            }
            writeln!(out, "{divider}")?;

            if page_index == last_page {
                writeln!(out, "{}", Self::format_total_row(report, &widths))?;
                writeln!(out, "{divider}")?;
            }

            writeln!(out)?;
            writeln!(out, "{}", pad(&report.footer, total_width, Align::Center))?;
        }

        Ok(())
    }
}
