//! Rendering options and configuration.

/// Options for rendering pages.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// How Markdown renders tables with merged cells
    pub table_fallback: TableFallback,

    /// Escape markup-special characters in contents
    pub escape_special_chars: bool,

    /// Drop line breaks inside contents instead of rendering them
    pub ignore_line_break: bool,

    /// JSON layout
    pub json_format: JsonFormat,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table fallback mode.
    pub fn with_table_fallback(mut self, fallback: TableFallback) -> Self {
        self.table_fallback = fallback;
        self
    }

    /// Enable or disable escaping of special characters.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Enable or disable dropping of line breaks.
    pub fn with_ignore_line_break(mut self, ignore: bool) -> Self {
        self.ignore_line_break = ignore;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Apply the line-break policy to a piece of contents.
    ///
    /// With `ignore_line_break` set, line breaks are removed; otherwise they
    /// are replaced by `separator`.
    pub(crate) fn flatten_line_breaks(&self, text: &str, separator: &str) -> String {
        let separator = if self.ignore_line_break { "" } else { separator };
        text.replace("\r\n", "\n").replace('\n', separator)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            table_fallback: TableFallback::Markdown,
            escape_special_chars: true,
            ignore_line_break: false,
            json_format: JsonFormat::Pretty,
        }
    }
}

/// How to render tables that can't be expressed in simple Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFallback {
    /// Use standard Markdown table syntax; merged contents sit at the anchor
    #[default]
    Markdown,
    /// Use HTML table tags for tables with merged cells
    Html,
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_table_fallback(TableFallback::Html)
            .with_escaping(false)
            .with_ignore_line_break(true)
            .with_json_format(JsonFormat::Compact);

        assert_eq!(options.table_fallback, TableFallback::Html);
        assert!(!options.escape_special_chars);
        assert!(options.ignore_line_break);
        assert_eq!(options.json_format, JsonFormat::Compact);
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert!(options.escape_special_chars);
        assert!(!options.ignore_line_break);
        assert_eq!(options.table_fallback, TableFallback::Markdown);
    }

    #[test]
    fn test_flatten_line_breaks() {
        let keep = RenderOptions::new();
        assert_eq!(keep.flatten_line_breaks("a\nb\r\nc", "<br>"), "a<br>b<br>c");

        let drop = RenderOptions::new().with_ignore_line_break(true);
        assert_eq!(drop.flatten_line_breaks("a\nb", "<br>"), "ab");
    }
}
