//! The detection capability consumed by table reconstruction.
//!
//! The object-detection model itself lives outside this crate. Anything
//! that can report row, column and span boxes for a table region plugs in
//! through [`StructureDetector`].

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::model::Detection;

/// Trait for table structure detectors.
pub trait StructureDetector: Send + Sync {
    /// Detect structure inside `region`, given in page coordinates.
    ///
    /// Returned boxes are relative to the region's top-left corner.
    fn detect(&self, region: &Rect) -> Result<Vec<Detection>>;
}

impl<D: StructureDetector + ?Sized> StructureDetector for &D {
    fn detect(&self, region: &Rect) -> Result<Vec<Detection>> {
        (**self).detect(region)
    }
}

impl<D: StructureDetector + ?Sized> StructureDetector for Box<D> {
    fn detect(&self, region: &Rect) -> Result<Vec<Detection>> {
        (**self).detect(region)
    }
}

/// Detector replaying detections recorded per region.
///
/// Used for detection dumps produced by an earlier inference run, and for
/// feeding synthetic detections in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordedDetector {
    regions: HashMap<Rect, Vec<Detection>>,
}

impl RecordedDetector {
    /// Create a detector with no recorded regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the detections for a region and return self.
    pub fn with_region(mut self, region: Rect, detections: Vec<Detection>) -> Self {
        self.record(region, detections);
        self
    }

    /// Record the detections for a region, appending to earlier ones.
    pub fn record(&mut self, region: Rect, detections: Vec<Detection>) {
        self.regions.entry(region).or_default().extend(detections);
    }

    /// Number of recorded regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

impl StructureDetector for RecordedDetector {
    fn detect(&self, region: &Rect) -> Result<Vec<Detection>> {
        self.regions.get(region).cloned().ok_or_else(|| {
            Error::Detection(format!(
                "no detections recorded for region [{}, {}, {}, {}]",
                region.x1, region.y1, region.x2, region.y2
            ))
        })
    }
}

/// Detector adapter dropping detections below a confidence threshold.
#[derive(Debug, Clone)]
pub struct ScoreFilter<D> {
    inner: D,
    threshold: f32,
}

impl<D: StructureDetector> ScoreFilter<D> {
    /// Wrap `inner`, keeping detections with `score >= threshold`.
    pub fn new(inner: D, threshold: f32) -> Self {
        Self { inner, threshold }
    }

    /// The configured threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl<D: StructureDetector> StructureDetector for ScoreFilter<D> {
    fn detect(&self, region: &Rect) -> Result<Vec<Detection>> {
        let detections = self.inner.detect(region)?;
        let total = detections.len();
        let kept: Vec<Detection> = detections
            .into_iter()
            .filter(|d| d.score >= self.threshold)
            .collect();

        if kept.len() < total {
            log::debug!(
                "ScoreFilter: kept {} of {} detections (threshold {})",
                kept.len(),
                total,
                self.threshold
            );
        }
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_detector() {
        let region = Rect::new(10, 10, 110, 110);
        let detector = RecordedDetector::new()
            .with_region(region, vec![Detection::row(Rect::new(0, 0, 100, 10), 0.9)]);

        assert_eq!(detector.region_count(), 1);
        assert_eq!(detector.detect(&region).unwrap().len(), 1);
        assert!(matches!(
            detector.detect(&Rect::new(0, 0, 5, 5)),
            Err(Error::Detection(_))
        ));
    }

    #[test]
    fn test_score_filter() {
        let region = Rect::new(0, 0, 100, 100);
        let detector = RecordedDetector::new().with_region(
            region,
            vec![
                Detection::row(Rect::new(0, 0, 100, 10), 0.9),
                Detection::row(Rect::new(0, 20, 100, 30), 0.3),
                Detection::column(Rect::new(0, 0, 10, 100), 0.5),
            ],
        );
        let filtered = ScoreFilter::new(detector, 0.5);

        let kept = filtered.detect(&region).unwrap();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|d| d.score >= 0.5));
    }

    #[test]
    fn test_boxed_detector() {
        let region = Rect::new(0, 0, 10, 10);
        let detector: Box<dyn StructureDetector> =
            Box::new(RecordedDetector::new().with_region(region, Vec::new()));
        assert!(detector.detect(&region).unwrap().is_empty());
    }
}
