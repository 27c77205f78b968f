//! Reconstruction options and configuration.

use crate::geometry::DEFAULT_CONTAINMENT_THRESHOLD;

/// Options for rebuilding tables from detections.
#[derive(Debug, Clone)]
pub struct RecognizeOptions {
    /// Overlap ratio above which a box counts as contained in another.
    /// Shared by deduplication, span merging and content assignment.
    pub containment_threshold: f64,

    /// Whether to reconstruct independent tables in parallel
    pub parallel: bool,
}

impl RecognizeOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the containment threshold, clamped to the open interval (0, 1).
    pub fn with_containment_threshold(mut self, threshold: f64) -> Self {
        self.containment_threshold = threshold.clamp(0.01, 0.99);
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for RecognizeOptions {
    fn default() -> Self {
        Self {
            containment_threshold: DEFAULT_CONTAINMENT_THRESHOLD,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = RecognizeOptions::new()
            .with_containment_threshold(0.6)
            .sequential();

        assert_eq!(options.containment_threshold, 0.6);
        assert!(!options.parallel);
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(
            RecognizeOptions::new()
                .with_containment_threshold(1.5)
                .containment_threshold,
            0.99
        );
        assert_eq!(
            RecognizeOptions::new()
                .with_containment_threshold(-1.0)
                .containment_threshold,
            0.01
        );
    }

    #[test]
    fn test_default_options() {
        let options = RecognizeOptions::default();
        assert_eq!(options.containment_threshold, DEFAULT_CONTAINMENT_THRESHOLD);
        assert!(options.parallel);
    }
}
