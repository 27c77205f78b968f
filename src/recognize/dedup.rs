//! Removal of redundant detections within one category.
//!
//! Detectors often report the same grid line twice, or a short fragment
//! nested inside the full line. Within each category a box is dropped when a
//! box with at least the same score contains it.

use crate::geometry::{contained_with, Rect};
use crate::model::{Category, Detection};

/// Deduplicated detections of one table, split by category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureElements {
    /// Row line detections, in input order
    pub rows: Vec<Detection>,
    /// Column line detections, in input order
    pub columns: Vec<Detection>,
    /// Merged-cell detections, in input order
    pub spans: Vec<Detection>,
}

impl StructureElements {
    /// Partition detections by category and deduplicate each category
    /// independently. Detections of [`Category::Other`] are discarded.
    pub fn from_detections(detections: &[Detection], threshold: f64) -> Self {
        let of = |category: Category| {
            let group: Vec<Detection> = detections
                .iter()
                .filter(|d| d.category == category)
                .cloned()
                .collect();
            dedup_within_category(&group, threshold)
        };

        let ignored = detections
            .iter()
            .filter(|d| d.category == Category::Other)
            .count();
        if ignored > 0 {
            log::debug!("Dedup: ignoring {} detections of other categories", ignored);
        }

        Self {
            rows: of(Category::Row),
            columns: of(Category::Column),
            spans: of(Category::Span),
        }
    }

    /// Row boxes sorted top to bottom.
    pub fn sorted_row_boxes(&self) -> Vec<Rect> {
        let mut boxes: Vec<Rect> = self.rows.iter().map(|d| d.bbox).collect();
        boxes.sort_by_key(|b| b.y1);
        boxes
    }

    /// Column boxes sorted left to right.
    pub fn sorted_column_boxes(&self) -> Vec<Rect> {
        let mut boxes: Vec<Rect> = self.columns.iter().map(|d| d.bbox).collect();
        boxes.sort_by_key(|b| b.x1);
        boxes
    }

    /// Span boxes in detection order.
    pub fn span_boxes(&self) -> Vec<Rect> {
        self.spans.iter().map(|d| d.bbox).collect()
    }
}

/// Drop every detection superseded by another detection of the group.
///
/// Survivors keep their relative input order. Each pair is judged against
/// the original group, so a box nested in an already dropped box is still
/// dropped. Output is deterministic only for a deterministic input order.
pub fn dedup_within_category(group: &[Detection], threshold: f64) -> Vec<Detection> {
    let mut keep = vec![true; group.len()];

    for (i, inner) in group.iter().enumerate() {
        keep[i] = !group
            .iter()
            .enumerate()
            .any(|(j, outer)| j != i && supersedes(outer, j, inner, i, threshold));
    }

    let survivors: Vec<Detection> = group
        .iter()
        .zip(&keep)
        .filter(|(_, keep)| **keep)
        .map(|(d, _)| d.clone())
        .collect();

    if survivors.len() < group.len() {
        log::debug!(
            "Dedup: dropped {} of {} detections",
            group.len() - survivors.len(),
            group.len()
        );
    }

    survivors
}

/// Whether `outer` (at input index `oi`) causes `inner` (at `ii`) to be dropped.
///
/// `inner` must be contained in `outer` and score no higher. On equal score
/// with mutual containment the larger box wins, then the earlier one.
fn supersedes(
    outer: &Detection,
    oi: usize,
    inner: &Detection,
    ii: usize,
    threshold: f64,
) -> bool {
    if !contained_with(&outer.bbox, &inner.bbox, threshold) {
        return false;
    }
    if outer.score != inner.score {
        return outer.score > inner.score;
    }
    if !contained_with(&inner.bbox, &outer.bbox, threshold) {
        return true;
    }

    match outer.bbox.area().cmp(&inner.bbox.area()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => oi < ii,
    }
}
