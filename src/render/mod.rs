//! Rendering module for converting pages to output formats.

mod compose;
mod csv;
mod json;
mod markdown;
mod options;

pub use self::csv::to_csv;
pub use compose::{assign_reading_order, escape_html, reading_order, render_table_html, to_html};
pub use json::to_json;
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{JsonFormat, RenderOptions, TableFallback};
