//! Output format selection and artifact naming.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::Page;
use crate::render::{to_csv, to_html, to_json, to_markdown, RenderOptions};

/// Output format for per-page artifacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON structure
    #[default]
    Json,
    /// CSV records
    Csv,
    /// HTML document
    Html,
    /// Markdown
    Markdown,
}

impl OutputFormat {
    /// File extension of the artifact.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
        }
    }

    /// Render one page in this format.
    pub fn render(&self, page: &Page, options: &RenderOptions) -> Result<String> {
        match self {
            OutputFormat::Json => to_json(page, options),
            OutputFormat::Csv => to_csv(page, options),
            OutputFormat::Html => Ok(to_html(page, options)),
            OutputFormat::Markdown => Ok(to_markdown(page, options)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

/// Artifact name for one page: `{parent-dir}_{file-stem}_p{page}.{ext}`.
pub fn artifact_name(input: &Path, page_number: u32, format: OutputFormat) -> String {
    let dirname = input
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    format!("{}_{}_p{}.{}", dirname, stem, page_number, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!(matches!(
            "xlsx".parse::<OutputFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_markdown_extension() {
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
    }

    #[test]
    fn test_artifact_name() {
        let name = artifact_name(Path::new("scans/invoices/april.json"), 2, OutputFormat::Html);
        assert_eq!(name, "invoices_april_p2.html");
    }

    #[test]
    fn test_artifact_name_without_parent() {
        let name = artifact_name(Path::new("april.json"), 1, OutputFormat::Markdown);
        assert_eq!(name, "_april_p1.md");
    }
}
