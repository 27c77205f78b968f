//! Page composition: reading order and HTML markup.
//!
//! Reading order is a single top-to-bottom key: elements are stable-sorted
//! by the top edge of their box. Elements sharing a top edge keep their
//! input order (tables before text blocks). Side-by-side columns are not
//! disambiguated, so a two-column page interleaves its columns.

use crate::model::{Page, PageElement, Table, TextBlock};

use super::RenderOptions;

/// Page elements in reading order.
pub fn reading_order(page: &Page) -> Vec<PageElement<'_>> {
    let mut elements = page.elements();
    elements.sort_by_key(|e| e.bbox().y1);
    elements
}

/// Write each element's reading-order position into its `order` slot.
pub fn assign_reading_order(page: &mut Page) {
    enum Slot {
        Table(usize),
        Text(usize),
    }

    let mut slots: Vec<(Slot, i32)> = page
        .tables
        .iter()
        .enumerate()
        .map(|(i, t)| (Slot::Table(i), t.bbox.y1))
        .chain(
            page.paragraphs
                .iter()
                .enumerate()
                .map(|(i, p)| (Slot::Text(i), p.bbox.y1)),
        )
        .collect();
    slots.sort_by_key(|(_, y1)| *y1);

    for (order, (slot, _)) in slots.into_iter().enumerate() {
        match slot {
            Slot::Table(i) => page.tables[i].order = order as u32,
            Slot::Text(i) => page.paragraphs[i].order = order as u32,
        }
    }
}

/// Render a page as one HTML document.
pub fn to_html(page: &Page, options: &RenderOptions) -> String {
    let mut body = String::new();
    for element in reading_order(page) {
        match element {
            PageElement::Table(t) => render_table_html(&mut body, t, options),
            PageElement::Text(p) => render_paragraph_html(&mut body, p, options),
        }
    }
    format!("<html><body>{}</body></html>", body)
}

/// Render one table as an HTML `<table>`.
///
/// Emits one `<tr>` per distinct `row` value of the sorted cell list and one
/// `<td>` per cell, each carrying its `rowspan` and `colspan`.
pub fn render_table_html(output: &mut String, table: &Table, options: &RenderOptions) {
    output.push_str("<table border=\"1\" style=\"border-collapse: collapse\">");

    for row in table.rows() {
        output.push_str("<tr>");
        for cell in row {
            output.push_str(&format!(
                "<td rowspan=\"{}\" colspan=\"{}\">",
                cell.row_span, cell.col_span
            ));
            output.push_str(&html_text(cell.text(), options));
            output.push_str("</td>");
        }
        output.push_str("</tr>");
    }

    output.push_str("</table>");
}

fn render_paragraph_html(output: &mut String, paragraph: &TextBlock, options: &RenderOptions) {
    output.push_str("<p>");
    output.push_str(&html_text(&paragraph.contents, options));
    output.push_str("</p>");
}

fn html_text(text: &str, options: &RenderOptions) -> String {
    let text = if options.escape_special_chars {
        escape_html(text)
    } else {
        text.to_string()
    };
    options.flatten_line_breaks(&text, "<br>")
}

/// Escape the characters HTML treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
