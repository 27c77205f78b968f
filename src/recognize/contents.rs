//! Filling cell contents from externally recognized words.

use crate::geometry::contained_with;
use crate::model::{TableCell, Word};

/// Set the contents of every cell that contains at least one word.
///
/// Words are read top to bottom, then left to right, and joined with line
/// breaks. A word may land in more than one cell when cell boxes overlap.
/// Cells without words keep `contents = None`.
pub fn assign_contents(cells: &mut [TableCell], words: &[Word], threshold: f64) {
    if words.is_empty() {
        return;
    }

    let mut ordered: Vec<&Word> = words.iter().collect();
    ordered.sort_by_key(|w| (w.bbox.y1, w.bbox.x1));

    for cell in cells.iter_mut() {
        let texts: Vec<&str> = ordered
            .iter()
            .filter(|w| contained_with(&cell.bbox, &w.bbox, threshold))
            .map(|w| w.contents.as_str())
            .collect();

        if !texts.is_empty() {
            cell.contents = Some(texts.join("\n"));
        }
    }
}
