//! Markdown rendering for pages.

use crate::model::{Page, PageElement, Table, TextBlock};

use super::compose::{reading_order, render_table_html};
use super::{RenderOptions, TableFallback};

/// Convert a page to Markdown.
pub fn to_markdown(page: &Page, options: &RenderOptions) -> String {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(page)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a page to Markdown.
    pub fn render(&self, page: &Page) -> String {
        let mut output = String::new();
        for element in reading_order(page) {
            match element {
                PageElement::Table(t) => self.render_table(&mut output, t),
                PageElement::Text(p) => self.render_paragraph(&mut output, p),
            }
        }
        output.trim().to_string()
    }

    fn render_paragraph(&self, output: &mut String, para: &TextBlock) {
        let text = self.escape(&para.contents);
        let text = self.options.flatten_line_breaks(text.trim(), "  \n");
        if text.is_empty() {
            return;
        }
        output.push_str(&text);
        output.push_str("\n\n");
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        if table.is_empty() {
            return;
        }

        // Use HTML for complex tables
        if table.has_merged_cells() && self.options.table_fallback == TableFallback::Html {
            render_table_html(output, table, &self.options);
            output.push_str("\n\n");
            return;
        }

        self.render_table_markdown(output, table);
    }

    fn render_table_markdown(&self, output: &mut String, table: &Table) {
        let grid = table.anchor_grid();

        for (i, row) in grid.iter().enumerate() {
            output.push('|');
            for cell in row {
                let text = cell.map(|c| self.cell_text(c.text())).unwrap_or_default();
                output.push_str(&format!(" {} |", text));
            }
            output.push('\n');

            // Add separator after header row
            if i == 0 {
                output.push('|');
                output.push_str(&" --- |".repeat(row.len()));
                output.push('\n');
            }
        }

        output.push('\n');
    }

    fn cell_text(&self, text: &str) -> String {
        let text = self.escape(text);
        self.options.flatten_line_breaks(text.trim(), "<br>")
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            // Core formatting that must be escaped
            '\\' | '`' | '*' | '_' |
            // Brackets for links/images, pipe for tables
            '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
