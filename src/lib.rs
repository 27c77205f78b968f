//! # tablegrid
//!
//! Table structure reconstruction from object-detection output.
//!
//! A table structure detector reports three kinds of boxes inside a table
//! region: row lines, column lines and merged-cell spans. This library turns
//! those unordered, possibly overlapping boxes into a grid of cells with
//! 1-based row/column indices and spans, then composes the tables with the
//! page's text blocks into HTML, Markdown, CSV or JSON.
//!
//! ## Quick Start
//!
//! ```
//! use tablegrid::recognize::{RecordedDetector, TableAssembler};
//! use tablegrid::{Detection, Rect};
//!
//! let region = Rect::new(0, 0, 100, 60);
//! let detector = RecordedDetector::new().with_region(
//!     region,
//!     vec![
//!         Detection::row(Rect::new(0, 0, 100, 10), 0.9),
//!         Detection::row(Rect::new(0, 50, 100, 60), 0.9),
//!         Detection::column(Rect::new(0, 0, 10, 60), 0.9),
//!         Detection::column(Rect::new(50, 0, 60, 60), 0.9),
//!     ],
//! );
//!
//! let table = TableAssembler::new(detector).assemble(&region, &[]).unwrap();
//! assert_eq!((table.n_row, table.n_col), (2, 2));
//! assert_eq!(table.cells.len(), 4);
//! ```
//!
//! ## Features
//!
//! - **Injected detector**: any model plugs in through [`StructureDetector`]
//! - **Noise tolerant**: nested and duplicate detections are removed per category
//! - **Merged cells**: span boxes fold the cells they cover into one spanning cell
//! - **Multiple output formats**: HTML, Markdown, CSV, JSON
//! - **Parallel processing**: uses Rayon across tables and input files

pub mod batch;
pub mod error;
pub mod geometry;
pub mod model;
pub mod recognize;
pub mod render;

// Re-export commonly used types
pub use batch::{BatchOptions, BatchProcessor, BatchReport, DetectionDump, OutputFormat};
pub use error::{Error, Result};
pub use geometry::{contained, contained_with, intersect, Rect, DEFAULT_CONTAINMENT_THRESHOLD};
pub use model::{
    Category, Detection, Document, Page, PageElement, Table, TableCell, TextBlock, Word,
};
pub use recognize::{RecognizeOptions, StructureDetector, TableAssembler};
pub use render::{JsonFormat, RenderOptions, TableFallback};

use std::path::Path;

/// Rebuild all pages of a detection dump file.
///
/// # Example
///
/// ```no_run
/// use tablegrid::recognize_file;
///
/// let doc = recognize_file("dumps/invoice.json").unwrap();
/// println!("Tables: {}", doc.table_count());
/// ```
pub fn recognize_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    recognize_file_with_options(path, &RecognizeOptions::default())
}

/// Rebuild all pages of a detection dump file with custom options.
pub fn recognize_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &RecognizeOptions,
) -> Result<Document> {
    let dump = DetectionDump::from_path(path)?;
    dump.recognize(options, batch::DEFAULT_SCORE_THRESHOLD)
}

/// Rebuild all pages of a detection dump held in memory.
pub fn recognize_bytes(data: &[u8]) -> Result<Document> {
    let dump = DetectionDump::from_slice(data)?;
    dump.recognize(&RecognizeOptions::default(), batch::DEFAULT_SCORE_THRESHOLD)
}

/// Render every page of a document as one HTML string per page.
pub fn to_html_pages(doc: &Document, options: &RenderOptions) -> Vec<String> {
    doc.pages
        .iter()
        .map(|page| render::to_html(page, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_bytes_empty_data() {
        assert!(matches!(recognize_bytes(b""), Err(Error::Json(_))));
    }

    #[test]
    fn test_recognize_bytes_no_pages() {
        let doc = recognize_bytes(br#"{"pages": []}"#).unwrap();
        assert!(doc.is_empty());
        assert!(to_html_pages(&doc, &RenderOptions::default()).is_empty());
    }

    #[test]
    fn test_recognize_file_missing() {
        let result = recognize_file("/no/such/dump.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_to_html_pages() {
        let doc = recognize_bytes(
            br#"{"pages": [
                {"paragraphs": [{"box": [0, 0, 10, 10], "contents": "one"}]},
                {"paragraphs": [{"box": [0, 0, 10, 10], "contents": "two"}]}
            ]}"#,
        )
        .unwrap();
        let pages = to_html_pages(&doc, &RenderOptions::default());
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1], "<html><body><p>two</p></body></html>");
    }
}
