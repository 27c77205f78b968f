//! Integration tests for table reconstruction.

use tablegrid::recognize::{
    build_grid, merge_spans, reconstruct, RecognizeOptions, RecordedDetector, TableAssembler,
};
use tablegrid::{Detection, Rect, StructureDetector, TableCell, DEFAULT_CONTAINMENT_THRESHOLD};

const T: f64 = DEFAULT_CONTAINMENT_THRESHOLD;

fn rows() -> Vec<Rect> {
    vec![Rect::new(0, 0, 100, 10), Rect::new(0, 50, 100, 60)]
}

fn columns() -> Vec<Rect> {
    vec![Rect::new(0, 0, 10, 100), Rect::new(50, 0, 60, 100)]
}

fn keys(cells: &[TableCell]) -> Vec<(u32, u32)> {
    cells.iter().map(|c| (c.row, c.col)).collect()
}

#[test]
fn test_two_by_two_grid() {
    let cells = build_grid(&rows(), &columns());
    assert_eq!(keys(&cells), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
}

#[test]
fn test_full_extent_span_collapses_grid() {
    let cells = merge_spans(build_grid(&rows(), &columns()), &[Rect::new(0, 0, 100, 60)], T);

    assert_eq!(cells.len(), 1);
    let cell = &cells[0];
    assert_eq!((cell.row, cell.col, cell.row_span, cell.col_span), (1, 1, 2, 2));
    assert_eq!(cell.bbox, Rect::new(0, 0, 100, 60));
}

#[test]
fn test_grid_size_m_by_n() {
    let rows: Vec<Rect> = (0..5).map(|i| Rect::new(0, i * 20, 200, i * 20 + 10)).collect();
    let columns: Vec<Rect> = (0..4).map(|j| Rect::new(j * 50, 0, j * 50 + 10, 100)).collect();

    let cells = build_grid(&rows, &columns);
    assert_eq!(cells.len(), 20);
    assert_eq!(cells.iter().map(|c| c.row).max(), Some(5));
    assert_eq!(cells.iter().map(|c| c.col).max(), Some(4));
    assert!(cells.iter().all(|c| c.row >= 1 && c.col >= 1));
}

#[test]
fn test_span_over_k_cells() {
    let rows: Vec<Rect> = (0..3).map(|i| Rect::new(0, i * 20, 200, i * 20 + 10)).collect();
    let columns: Vec<Rect> = (0..3).map(|j| Rect::new(j * 50, 0, j * 50 + 10, 100)).collect();
    let grid = build_grid(&rows, &columns);

    // Covers rows 1-2 and columns 2-3: four primitive cells.
    let span = Rect::new(45, 0, 120, 35);
    let cells = merge_spans(grid, &[span], T);

    assert_eq!(cells.len(), 9 - 4 + 1);
    let merged: Vec<&TableCell> = cells.iter().filter(|c| c.is_merged()).collect();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].row_span * merged[0].col_span, 4);
    assert_eq!((merged[0].row, merged[0].col), (1, 2));
}

#[test]
fn test_span_over_zero_cells() {
    let grid = build_grid(&rows(), &columns());
    let cells = merge_spans(grid.clone(), &[Rect::new(500, 500, 600, 600)], T);
    assert_eq!(cells, grid);
}

#[test]
fn test_output_sorted_and_idempotent() {
    let detections = vec![
        Detection::row(Rect::new(0, 50, 100, 60), 0.9),
        Detection::column(Rect::new(50, 0, 60, 100), 0.8),
        Detection::row(Rect::new(0, 0, 100, 10), 0.7),
        Detection::column(Rect::new(0, 0, 10, 100), 0.95),
        Detection::span(Rect::new(0, 45, 100, 65), 0.9),
    ];
    let structure = reconstruct(&detections, T);

    let mut resorted = structure.cells.clone();
    tablegrid::model::sort_in_grid_order(&mut resorted);
    assert_eq!(resorted, structure.cells);
    assert_eq!(keys(&structure.cells), vec![(1, 1), (1, 2), (2, 1)]);
    assert_eq!(structure.cells[2].col_span, 2);
}

#[test]
fn test_duplicate_lines_do_not_inflate_grid() {
    let detections = vec![
        Detection::row(Rect::new(0, 0, 100, 10), 0.9),
        Detection::row(Rect::new(2, 0, 98, 10), 0.6),
        Detection::row(Rect::new(0, 50, 100, 60), 0.9),
        Detection::column(Rect::new(0, 0, 10, 100), 0.9),
    ];
    let structure = reconstruct(&detections, T);
    assert_eq!(structure.n_row, 2);
    assert_eq!(structure.n_col, 1);
    assert_eq!(structure.cells.len(), 2);
}

#[test]
fn test_coordinate_translation() {
    let (ox, oy) = (37, 412);
    let region = Rect::new(ox, oy, ox + 100, oy + 100);
    let detections = vec![
        Detection::row(Rect::new(0, 0, 100, 10), 0.9),
        Detection::row(Rect::new(0, 50, 100, 60), 0.9),
        Detection::column(Rect::new(0, 0, 10, 100), 0.9),
        Detection::column(Rect::new(50, 0, 60, 100), 0.9),
    ];
    let local = reconstruct(&detections, T);

    let detector = RecordedDetector::new().with_region(region, detections);
    let table = TableAssembler::new(detector).assemble(&region, &[]).unwrap();

    assert_eq!(table.bbox, region);
    for (page, local) in table.cells.iter().zip(&local.cells) {
        assert_eq!(Some(page.bbox), local.bbox.translate(ox, oy));
    }
}

#[test]
fn test_region_without_detections() {
    let region = Rect::new(0, 0, 100, 100);
    let detector = RecordedDetector::new().with_region(region, Vec::new());
    let table = TableAssembler::new(detector).assemble(&region, &[]).unwrap();

    assert_eq!(table.n_row, 0);
    assert_eq!(table.n_col, 0);
    assert!(table.cells.is_empty());
}

/// Detector that always fails, standing in for a broken model.
struct FailingDetector;

impl StructureDetector for FailingDetector {
    fn detect(&self, _region: &Rect) -> tablegrid::Result<Vec<Detection>> {
        Err(tablegrid::Error::Detection("model unavailable".into()))
    }
}

#[test]
fn test_detector_failure_surfaces() {
    let assembler = TableAssembler::with_options(FailingDetector, RecognizeOptions::new());
    let result = assembler.assemble_all(&[Rect::new(0, 0, 10, 10)], &[]);
    assert!(matches!(result, Err(tablegrid::Error::Detection(_))));
}
