//! Primitive grid construction from row and column lines.

use crate::geometry::{intersect, Rect};
use crate::model::TableCell;

/// Build one 1×1 cell for every row/column pair that overlaps.
///
/// `rows` must be sorted by top edge and `columns` by left edge; the slice
/// positions become the 1-based grid indices. Pairs that do not intersect
/// produce no cell, so irregular tables yield a sparse grid. Output is in
/// row-major order.
pub fn build_grid(rows: &[Rect], columns: &[Rect]) -> Vec<TableCell> {
    let mut cells = Vec::with_capacity(rows.len() * columns.len());

    for (i, row) in rows.iter().enumerate() {
        for (j, column) in columns.iter().enumerate() {
            if let Some(bbox) = intersect(row, column) {
                cells.push(TableCell::primitive(i as u32 + 1, j as u32 + 1, bbox));
            }
        }
    }

    log::debug!(
        "Grid: {} rows x {} columns -> {} cells",
        rows.len(),
        columns.len(),
        cells.len()
    );
    cells
}
