//! CSV rendering for pages.

use crate::error::{Error, Result};
use crate::model::{Page, PageElement, Table};

use super::compose::reading_order;
use super::RenderOptions;

/// Convert a page to CSV.
///
/// Each table is expanded into its `n_row × n_col` grid, merged contents at
/// the anchor position and covered positions left empty. Each text block is
/// a one-field record. Elements follow the reading order and are separated
/// by a blank line.
pub fn to_csv(page: &Page, options: &RenderOptions) -> Result<String> {
    let mut builder = csv::WriterBuilder::new();
    builder.flexible(true);
    let mut writer = builder.from_writer(Vec::new());

    for (i, element) in reading_order(page).into_iter().enumerate() {
        if i > 0 {
            // The csv writer quotes empty records, so the blank line goes
            // straight to the buffer.
            let mut buf = writer
                .into_inner()
                .map_err(|e| Error::Render(format!("CSV flush error: {}", e)))?;
            buf.push(b'\n');
            writer = builder.from_writer(buf);
        }
        match element {
            PageElement::Table(t) => write_table(&mut writer, t, options)?,
            PageElement::Text(p) => {
                writer.write_record([options.flatten_line_breaks(&p.contents, "\n")])?
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Render(format!("CSV flush error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::Render(format!("CSV encoding error: {}", e)))
}

fn write_table<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    table: &Table,
    options: &RenderOptions,
) -> Result<()> {
    for row in table.anchor_grid() {
        let record: Vec<String> = row
            .iter()
            .map(|cell| {
                cell.map(|c| options.flatten_line_breaks(c.text(), "\n"))
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&record)?;
    }
    Ok(())
}
