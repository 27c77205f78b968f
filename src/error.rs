//! Error types for tablegrid library.

use std::io;
use thiserror::Error;

/// Result type alias for tablegrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a single unit of work (one table region, one file).
///
/// Geometric non-matches are never reported here: disjoint boxes, spans that
/// cover no cells and tables without rows or columns all produce empty
/// results instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file is not a valid detection dump.
    #[error("Invalid detection input: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing CSV output.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A table region has malformed coordinates.
    #[error("Invalid table region [{0}, {1}, {2}, {3}]")]
    InvalidRegion(i32, i32, i32, i32),

    /// The detection capability failed for a region.
    #[error("Detection failed: {0}")]
    Detection(String),

    /// The output format selector is not recognized.
    #[error("Unsupported output format: {0} (expected json, csv, html or markdown)")]
    UnsupportedFormat(String),

    /// Error during rendering (HTML, Markdown, CSV, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
