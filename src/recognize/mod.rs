//! Table structure reconstruction.
//!
//! Turns row, column and span detections into a grid of cells:
//!
//! 1. [`StructureElements`] deduplicates detections per category.
//! 2. [`build_grid`] intersects sorted row and column lines into 1×1 cells.
//! 3. [`merge_spans`] folds cells covered by span boxes into merged cells.
//! 4. [`TableAssembler`] drives the steps per table region and restores page
//!    coordinates.
//!
//! Every stage is a pure function of its inputs.

mod assembler;
mod contents;
mod dedup;
mod detector;
mod grid;
mod options;
mod span;

pub use assembler::{reconstruct, CellStructure, TableAssembler};
pub use contents::assign_contents;
pub use dedup::{dedup_within_category, StructureElements};
pub use detector::{RecordedDetector, ScoreFilter, StructureDetector};
pub use grid::build_grid;
pub use options::RecognizeOptions;
pub use span::merge_spans;
