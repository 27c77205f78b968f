//! Table types.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// A reconstructed table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table region in page coordinates
    #[serde(rename = "box")]
    pub bbox: Rect,

    /// Number of detected row lines (independent of merges)
    pub n_row: u32,

    /// Number of detected column lines (independent of merges)
    pub n_col: u32,

    /// Position in the page reading order
    pub order: u32,

    /// Cells sorted by `(row, col)`
    pub cells: Vec<TableCell>,
}

impl Table {
    /// Create a table from already sorted cells.
    pub fn new(bbox: Rect, n_row: u32, n_col: u32, cells: Vec<TableCell>) -> Self {
        Self {
            bbox,
            n_row,
            n_col,
            order: 0,
            cells,
        }
    }

    /// Create a table without any grid lines.
    pub fn empty(bbox: Rect) -> Self {
        Self::new(bbox, 0, 0, Vec::new())
    }

    /// Check if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if the table has complex structure (merged cells).
    pub fn has_merged_cells(&self) -> bool {
        self.cells.iter().any(TableCell::is_merged)
    }

    /// Find the cell whose span covers grid position `(row, col)`.
    pub fn cell_at(&self, row: u32, col: u32) -> Option<&TableCell> {
        self.cells.iter().find(|c| c.covers(row, col))
    }

    /// Cells grouped by their `row` value, in row-major order.
    ///
    /// Rows without an anchored cell produce no group.
    pub fn rows(&self) -> Vec<&[TableCell]> {
        self.cells
            .chunk_by(|a, b| a.row == b.row)
            .collect()
    }

    /// Expand the table into an `n_row × n_col` matrix.
    ///
    /// Each cell appears once, at its anchor position; positions covered by
    /// a span but not anchoring it, and positions without any cell, are
    /// `None`.
    pub fn anchor_grid(&self) -> Vec<Vec<Option<&TableCell>>> {
        let mut grid = vec![vec![None; self.n_col as usize]; self.n_row as usize];
        for cell in &self.cells {
            let (r, c) = (cell.row as usize, cell.col as usize);
            if r >= 1 && c >= 1 && r <= grid.len() && c <= self.n_col as usize {
                grid[r - 1][c - 1] = Some(cell);
            }
        }
        grid
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| c.text())
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table cell.
///
/// Primitive cells (one row line crossing one column line) and merged cells
/// share this representation; they are not distinguished after span merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// 1-based grid row
    pub row: u32,

    /// 1-based grid column
    pub col: u32,

    /// Number of rows this cell spans
    pub row_span: u32,

    /// Number of columns this cell spans
    pub col_span: u32,

    /// Cell box; for merged cells, the originating span detection
    #[serde(rename = "box")]
    pub bbox: Rect,

    /// Recognized text, if any
    pub contents: Option<String>,
}

impl TableCell {
    /// Create a 1×1 cell.
    pub fn primitive(row: u32, col: u32, bbox: Rect) -> Self {
        Self::merged(row, col, 1, 1, bbox)
    }

    /// Create a cell spanning `row_span × col_span` grid positions.
    pub fn merged(row: u32, col: u32, row_span: u32, col_span: u32, bbox: Rect) -> Self {
        Self {
            row,
            col,
            row_span,
            col_span,
            bbox,
            contents: None,
        }
    }

    /// Set contents and return self.
    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    /// Contents, or the empty string when absent.
    pub fn text(&self) -> &str {
        self.contents.as_deref().unwrap_or("")
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.col_span > 1
    }

    /// Whether grid position `(row, col)` falls inside this cell's span.
    pub fn covers(&self, row: u32, col: u32) -> bool {
        row >= self.row
            && row < self.row + self.row_span
            && col >= self.col
            && col < self.col + self.col_span
    }

    /// Grid ordering: ascending by `(row, col)`.
    pub fn grid_cmp(&self, other: &TableCell) -> Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// Sort cells ascending by `(row, col)`.
///
/// The sort is stable, so cells sharing an anchor keep their relative order.
/// Renderers and exporters rely on this ordering.
pub fn sort_in_grid_order(cells: &mut [TableCell]) {
    cells.sort_by(TableCell::grid_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: u32, col: u32) -> TableCell {
        TableCell::primitive(row, col, Rect::new(0, 0, 1, 1))
    }

    #[test]
    fn test_table_empty() {
        let table = Table::empty(Rect::new(0, 0, 10, 10));
        assert!(table.is_empty());
        assert_eq!(table.n_row, 0);
        assert_eq!(table.n_col, 0);
        assert!(table.rows().is_empty());
    }

    #[test]
    fn test_sort_in_grid_order_is_stable() {
        let mut cells = vec![
            cell(2, 1),
            cell(1, 2).with_contents("first"),
            cell(1, 1),
            cell(1, 2).with_contents("second"),
        ];
        sort_in_grid_order(&mut cells);

        let keys: Vec<_> = cells.iter().map(|c| (c.row, c.col)).collect();
        assert_eq!(keys, vec![(1, 1), (1, 2), (1, 2), (2, 1)]);
        assert_eq!(cells[1].text(), "first");
        assert_eq!(cells[2].text(), "second");
    }

    #[test]
    fn test_rows_grouping() {
        let table = Table::new(
            Rect::new(0, 0, 10, 10),
            3,
            2,
            vec![cell(1, 1), cell(1, 2), cell(3, 1)],
        );
        let rows = table.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1][0].row, 3);
    }

    #[test]
    fn test_merged_cell_coverage() {
        let merged = TableCell::merged(1, 1, 2, 3, Rect::new(0, 0, 1, 1));
        assert!(merged.is_merged());
        assert!(merged.covers(2, 3));
        assert!(!merged.covers(3, 1));
        assert!(!merged.covers(1, 4));

        let table = Table::new(Rect::new(0, 0, 10, 10), 2, 3, vec![merged]);
        assert!(table.has_merged_cells());
        assert!(table.cell_at(2, 2).is_some());
    }

    #[test]
    fn test_anchor_grid() {
        let table = Table::new(
            Rect::new(0, 0, 10, 10),
            2,
            2,
            vec![
                TableCell::merged(1, 1, 1, 2, Rect::new(0, 0, 1, 1)).with_contents("Header"),
                cell(2, 2),
            ],
        );
        let grid = table.anchor_grid();
        assert_eq!(grid[0][0].map(|c| c.text()), Some("Header"));
        assert!(grid[0][1].is_none());
        assert!(grid[1][0].is_none());
        assert!(grid[1][1].is_some());
    }

    #[test]
    fn test_cell_serialization_schema() {
        let cell = TableCell::primitive(1, 2, Rect::new(0, 0, 5, 5));
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json["row"], 1);
        assert_eq!(json["col"], 2);
        assert_eq!(json["row_span"], 1);
        assert_eq!(json["box"], serde_json::json!([0, 0, 5, 5]));
        assert!(json["contents"].is_null());
    }
}
