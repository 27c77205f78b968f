//! Detection dump input.
//!
//! A dump records what the external models reported for every page of one
//! source file:
//!
//! ```json
//! {
//!   "pages": [{
//!     "tables": [{"box": [x1, y1, x2, y2], "detections": [
//!       {"box": [0, 0, 400, 30], "score": 0.93, "category": "row"}
//!     ]}],
//!     "paragraphs": [{"box": [x1, y1, x2, y2], "contents": "..."}],
//!     "words": [{"box": [x1, y1, x2, y2], "contents": "..."}]
//!   }]
//! }
//! ```
//!
//! Table boxes, paragraphs and words are in page coordinates; detection
//! boxes are relative to their table's top-left corner.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Rect;
use crate::model::{Detection, Document, Page, TextBlock, Word};
use crate::recognize::{RecognizeOptions, RecordedDetector, ScoreFilter, TableAssembler};
use crate::render::assign_reading_order;

/// Detector output for all pages of one source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionDump {
    /// Pages in source order
    pub pages: Vec<PageInput>,
}

/// Detector output for one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageInput {
    /// Detected table regions with their structure detections
    #[serde(default)]
    pub tables: Vec<TableInput>,

    /// Text blocks outside tables
    #[serde(default)]
    pub paragraphs: Vec<TextBlock>,

    /// Recognized words used to fill table cells
    #[serde(default)]
    pub words: Vec<Word>,
}

/// One detected table region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableInput {
    /// Region in page coordinates
    #[serde(rename = "box")]
    pub bbox: Rect,

    /// Structure detections, relative to the region
    #[serde(default)]
    pub detections: Vec<Detection>,
}

impl DetectionDump {
    /// Read a dump from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_slice(&data)
    }

    /// Read a dump from JSON bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Rebuild every page of the dump.
    pub fn recognize(&self, options: &RecognizeOptions, score_threshold: f32) -> Result<Document> {
        let mut document = Document::new();
        for (i, page) in self.pages.iter().enumerate() {
            document.add_page(page.recognize(i as u32 + 1, options, score_threshold)?);
        }
        Ok(document)
    }
}

impl PageInput {
    /// Rebuild the tables of this page and assign the reading order.
    ///
    /// Detections scoring below `score_threshold` are discarded before
    /// deduplication.
    pub fn recognize(
        &self,
        number: u32,
        options: &RecognizeOptions,
        score_threshold: f32,
    ) -> Result<Page> {
        let mut detector = RecordedDetector::new();
        for table in &self.tables {
            detector.record(table.bbox, table.detections.clone());
        }

        let assembler = TableAssembler::with_options(
            ScoreFilter::new(detector, score_threshold),
            options.clone(),
        );
        let regions: Vec<Rect> = self.tables.iter().map(|t| t.bbox).collect();

        let mut page = Page::new(number);
        page.tables = assembler.assemble_all(&regions, &self.words)?;
        page.paragraphs = self.paragraphs.clone();
        assign_reading_order(&mut page);

        log::debug!(
            "Page {}: {} tables, {} paragraphs",
            number,
            page.tables.len(),
            page.paragraphs.len()
        );
        Ok(page)
    }
}
