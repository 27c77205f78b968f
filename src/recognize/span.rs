//! Folding primitive cells under merged-cell detections.

use crate::geometry::{contained_with, Rect};
use crate::model::{sort_in_grid_order, TableCell};

/// Replace the primitive cells covered by each span box with one merged cell.
///
/// Spans are applied in order; a cell claimed by one span is no longer
/// available to later spans. The merged cell anchors at the smallest row and
/// column of its children, spans to the largest, and keeps the span box as
/// its box. A span that covers no cell is discarded without a trace in the
/// output. Unclaimed cells pass through unchanged. The result is sorted by
/// `(row, col)`.
pub fn merge_spans(cells: Vec<TableCell>, spans: &[Rect], threshold: f64) -> Vec<TableCell> {
    let mut working = cells;
    let mut merged = Vec::new();

    for span in spans {
        let (claimed, rest): (Vec<TableCell>, Vec<TableCell>) = working
            .into_iter()
            .partition(|cell| contained_with(span, &cell.bbox, threshold));
        working = rest;

        match merge_children(span, &claimed) {
            Some(cell) => merged.push(cell),
            None => log::debug!("SpanMerger: span {:?} covers no cells, discarded", span),
        }
    }

    working.extend(merged);
    sort_in_grid_order(&mut working);
    working
}

fn merge_children(span: &Rect, children: &[TableCell]) -> Option<TableCell> {
    let row = children.iter().map(|c| c.row).min()?;
    let col = children.iter().map(|c| c.col).min()?;
    let max_row = children.iter().map(|c| c.row).max()?;
    let max_col = children.iter().map(|c| c.col).max()?;

    Some(TableCell::merged(
        row,
        col,
        max_row - row + 1,
        max_col - col + 1,
        *span,
    ))
}
