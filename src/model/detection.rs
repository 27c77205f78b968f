//! Detector output types.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Class of a structure detection inside a table crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// One horizontal grid line of the table
    Row,
    /// One vertical grid line of the table
    #[serde(alias = "col")]
    Column,
    /// A merged-cell region
    Span,
    /// Anything else the detector reports; ignored by reconstruction
    #[serde(other)]
    Other,
}

impl Category {
    /// Map a detector label to a category.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "row" => Category::Row,
            "col" | "column" => Category::Column,
            "span" => Category::Span,
            _ => Category::Other,
        }
    }
}

/// A classified bounding box with its confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Box in crop-local coordinates
    #[serde(rename = "box")]
    pub bbox: Rect,

    /// Confidence in `[0, 1]`
    pub score: f32,

    /// Detected class
    pub category: Category,
}

impl Detection {
    /// Create a new detection.
    pub fn new(bbox: Rect, score: f32, category: Category) -> Self {
        Self {
            bbox,
            score,
            category,
        }
    }

    /// Create a row detection.
    pub fn row(bbox: Rect, score: f32) -> Self {
        Self::new(bbox, score, Category::Row)
    }

    /// Create a column detection.
    pub fn column(bbox: Rect, score: f32) -> Self {
        Self::new(bbox, score, Category::Column)
    }

    /// Create a span detection.
    pub fn span(bbox: Rect, score: f32) -> Self {
        Self::new(bbox, score, Category::Span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label() {
        assert_eq!(Category::from_label("row"), Category::Row);
        assert_eq!(Category::from_label("col"), Category::Column);
        assert_eq!(Category::from_label("Span"), Category::Span);
        assert_eq!(Category::from_label("header"), Category::Other);
    }

    #[test]
    fn test_detection_deserialize() {
        let json = r#"[
            {"box": [0, 0, 100, 10], "score": 0.9, "category": "row"},
            {"box": [0, 0, 10, 100], "score": 0.8, "category": "col"},
            {"box": [0, 0, 50, 50], "score": 0.7, "category": "header"}
        ]"#;
        let detections: Vec<Detection> = serde_json::from_str(json).unwrap();
        assert_eq!(detections[0].category, Category::Row);
        assert_eq!(detections[1].category, Category::Column);
        assert_eq!(detections[2].category, Category::Other);
        assert_eq!(detections[0].bbox, Rect::new(0, 0, 100, 10));
    }
}
