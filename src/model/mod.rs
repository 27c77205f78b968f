//! Data model for reconstructed tables and page content.
//!
//! Detections come in from an external detector, tables and text blocks go
//! out to the renderers. Nothing here is mutated once its producing stage
//! has finished, apart from the reading-order slot on tables and text blocks.

mod detection;
mod document;
mod page;
mod table;

pub use crate::geometry::Rect;
pub use detection::{Category, Detection};
pub use document::Document;
pub use page::{Page, PageElement, TextBlock, Word};
pub use table::{sort_in_grid_order, Table, TableCell};
