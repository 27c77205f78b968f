//! Page-level types.

use serde::{Deserialize, Serialize};

use super::Table;
use crate::geometry::Rect;

/// A flat block of text on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Block region in page coordinates
    #[serde(rename = "box")]
    pub bbox: Rect,

    /// Text of the block
    pub contents: String,

    /// Position in the page reading order
    #[serde(default)]
    pub order: u32,
}

impl TextBlock {
    /// Create a new text block.
    pub fn new(bbox: Rect, contents: impl Into<String>) -> Self {
        Self {
            bbox,
            contents: contents.into(),
            order: 0,
        }
    }
}

/// A recognized word with its page-space box, used to fill table cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Word region in page coordinates
    #[serde(rename = "box")]
    pub bbox: Rect,

    /// Recognized text
    pub contents: String,
}

impl Word {
    /// Create a new word.
    pub fn new(bbox: Rect, contents: impl Into<String>) -> Self {
        Self {
            bbox,
            contents: contents.into(),
        }
    }
}

/// A single page with its reconstructed tables and text blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Tables on the page
    pub tables: Vec<Table>,

    /// Text blocks on the page
    pub paragraphs: Vec<TextBlock>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Default::default()
        }
    }

    /// Add a table to the page.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Add a text block to the page.
    pub fn add_paragraph(&mut self, paragraph: TextBlock) {
        self.paragraphs.push(paragraph);
    }

    /// Check if the page has no content.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.paragraphs.is_empty()
    }

    /// All elements in input order: tables first, then text blocks.
    pub fn elements(&self) -> Vec<PageElement<'_>> {
        self.tables
            .iter()
            .map(PageElement::Table)
            .chain(self.paragraphs.iter().map(PageElement::Text))
            .collect()
    }
}

/// A borrowed page element, as consumed by the renderers.
#[derive(Debug, Clone, Copy)]
pub enum PageElement<'a> {
    /// A reconstructed table
    Table(&'a Table),
    /// A text block
    Text(&'a TextBlock),
}

impl PageElement<'_> {
    /// Bounding box of the element in page coordinates.
    pub fn bbox(&self) -> Rect {
        match self {
            PageElement::Table(t) => t.bbox,
            PageElement::Text(p) => p.bbox,
        }
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, PageElement::Table(_))
    }
}
