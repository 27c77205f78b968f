//! Table assembly: detections for one region in, one [`Table`] out.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::model::{Detection, Table, TableCell, Word};

use super::contents::assign_contents;
use super::dedup::StructureElements;
use super::detector::StructureDetector;
use super::grid::build_grid;
use super::options::RecognizeOptions;
use super::span::merge_spans;

/// Cells of one table in crop-local coordinates, before translation.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStructure {
    /// Merged and sorted cells
    pub cells: Vec<TableCell>,
    /// Number of row lines after deduplication
    pub n_row: u32,
    /// Number of column lines after deduplication
    pub n_col: u32,
}

/// Run deduplication, grid construction and span merging on raw detections.
///
/// This is the pure core of reconstruction. Missing rows or columns yield an
/// empty cell list, never an error.
pub fn reconstruct(detections: &[Detection], threshold: f64) -> CellStructure {
    let elements = StructureElements::from_detections(detections, threshold);
    let rows = elements.sorted_row_boxes();
    let columns = elements.sorted_column_boxes();

    let cells = build_grid(&rows, &columns);
    let cells = merge_spans(cells, &elements.span_boxes(), threshold);

    CellStructure {
        cells,
        n_row: rows.len() as u32,
        n_col: columns.len() as u32,
    }
}

/// Builds tables by running an injected detector over table regions.
pub struct TableAssembler<D> {
    detector: D,
    options: RecognizeOptions,
}

impl<D: StructureDetector> TableAssembler<D> {
    /// Create an assembler with default options.
    pub fn new(detector: D) -> Self {
        Self::with_options(detector, RecognizeOptions::default())
    }

    /// Create an assembler with custom options.
    pub fn with_options(detector: D, options: RecognizeOptions) -> Self {
        Self { detector, options }
    }

    /// Get the options in use.
    pub fn options(&self) -> &RecognizeOptions {
        &self.options
    }

    /// Reconstruct the table inside `region` (page coordinates).
    ///
    /// Cell boxes are translated back to page coordinates, then filled from
    /// `words`. The table's box is the region itself and its `order` is left
    /// at 0 for the page composer to assign.
    ///
    /// # Errors
    ///
    /// Fails if the region is malformed, the detector fails, or a detected
    /// box cannot be moved into page coordinates without leaving the `i32`
    /// range. A region in which nothing is detected produces an empty table
    /// instead.
    pub fn assemble(&self, region: &Rect, words: &[Word]) -> Result<Table> {
        let invalid = || Error::InvalidRegion(region.x1, region.y1, region.x2, region.y2);
        if !region.is_valid() {
            return Err(invalid());
        }

        let detections = self.detector.detect(region)?;
        let structure = reconstruct(&detections, self.options.containment_threshold);

        let (dx, dy) = region.origin();
        let mut cells: Vec<TableCell> = structure
            .cells
            .into_iter()
            .map(|mut cell| -> Result<TableCell> {
                cell.bbox = cell.bbox.translate(dx, dy).ok_or_else(invalid)?;
                Ok(cell)
            })
            .collect::<Result<_>>()?;
        assign_contents(&mut cells, words, self.options.containment_threshold);

        log::debug!(
            "TableAssembler: region {:?} -> {} rows, {} columns, {} cells",
            region,
            structure.n_row,
            structure.n_col,
            cells.len()
        );

        Ok(Table::new(*region, structure.n_row, structure.n_col, cells))
    }

    /// Reconstruct several independent regions, in parallel when enabled.
    ///
    /// Tables are returned in region order. The first failing region aborts
    /// the whole call.
    pub fn assemble_all(&self, regions: &[Rect], words: &[Word]) -> Result<Vec<Table>> {
        if self.options.parallel {
            regions
                .par_iter()
                .map(|region| self.assemble(region, words))
                .collect()
        } else {
            regions
                .iter()
                .map(|region| self.assemble(region, words))
                .collect()
        }
    }
}
