//! JSON rendering for pages.

use crate::error::{Error, Result};
use crate::model::Page;

use super::{JsonFormat, RenderOptions};

/// Convert a page to JSON.
///
/// Tables follow the `{box, n_row, n_col, order, cells}` schema; line breaks
/// in contents are dropped when `ignore_line_break` is set.
pub fn to_json(page: &Page, options: &RenderOptions) -> Result<String> {
    let result = if options.ignore_line_break {
        let mut page = page.clone();
        for cell in page.tables.iter_mut().flat_map(|t| t.cells.iter_mut()) {
            if let Some(contents) = cell.contents.as_mut() {
                *contents = options.flatten_line_breaks(contents, "");
            }
        }
        for paragraph in &mut page.paragraphs {
            paragraph.contents = options.flatten_line_breaks(&paragraph.contents, "");
        }
        serialize(&page, options.json_format)
    } else {
        serialize(page, options.json_format)
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

fn serialize(page: &Page, format: JsonFormat) -> serde_json::Result<String> {
    match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(page),
        JsonFormat::Compact => serde_json::to_string(page),
    }
}
