//! Document renderers.
//!
//! A [`DocumentRenderer`] is the seam to the document-generation collaborator:
//! it receives the structured [`Report`] and owns page layout. The crate
//! ships a paginated plain-text grid renderer and a CSV renderer;
//! [`write_report`] places the rendered bytes in the output directory under
//! the report's own file stem.

/// CSV renderer
pub mod csv;
/// Paginated plain-text grid renderer
pub mod text;

pub use csv::CsvRenderer;
pub use text::TextRenderer;

use crate::core::report::Report;
use crate::errors::{Error, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Renders a report into an output stream.
pub trait DocumentRenderer {
    /// File extension of the produced document, without the dot.
    fn extension(&self) -> &'static str;

    /// Writes the rendered document to `out`.
    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()>;
}

/// Renders `report` into `dir`, naming the file from the report's stem.
///
/// Creates the directory if needed and returns the path of the written file.
/// Any failure surfaces as [`Error::Export`] and leaves no other state
/// behind.
pub fn write_report(
    renderer: &dyn DocumentRenderer,
    report: &Report,
    dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| Error::Export {
        message: format!("Failed to create output directory '{}': {e}", dir.display()),
    })?;

    let path = dir.join(format!("{}.{}", report.file_stem, renderer.extension()));
    let mut file = File::create(&path).map_err(|e| Error::Export {
        message: format!("Failed to create '{}': {e}", path.display()),
    })?;
    renderer.render(report, &mut file)?;
    file.flush().map_err(|e| Error::Export {
        message: format!("Failed to flush '{}': {e}", path.display()),
    })?;

    info!(path = %path.display(), "Report written");
    Ok(path)
}
