//! Width tolerance checking.

use belt_models::{Alert, AlertSeverity, WidthSample};
use tracing::debug;

use crate::config::AnalyzerConfig;

/// Checks each sample against the configured width tolerance band.
///
/// Detection is independent of segmentation: a sample can raise an alert
/// whether or not it also triggers a seam, and an alert never aborts the
/// run. At most one alert is raised per sample, since the bound checks
/// are mutually exclusive when `min < max`.
#[derive(Debug, Clone)]
pub struct AnomalyDetector {
    min_width_threshold: f64,
    max_width_threshold: f64,
}

impl AnomalyDetector {
    /// Create a detector for one pass over a width signal.
    ///
    /// The configuration is expected to be validated; see
    /// [`AnalyzerConfig::validate`].
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            min_width_threshold: config.min_width_threshold,
            max_width_threshold: config.max_width_threshold,
        }
    }

    /// Evaluate one sample. Returns an alert when the width is out of bounds.
    ///
    /// Severity is `Warning` within 10% of the violated bound and
    /// `Critical` beyond that.
    pub fn check(&self, sample: &WidthSample) -> Option<Alert> {
        if sample.width_px < self.min_width_threshold {
            let severity = if sample.width_px >= 0.9 * self.min_width_threshold {
                AlertSeverity::Warning
            } else {
                AlertSeverity::Critical
            };
            debug!(
                "Width below minimum at frame {} ({:.2}px < {:.2}px, {})",
                sample.frame_index, sample.width_px, self.min_width_threshold, severity
            );
            return Some(Alert::below_min(
                sample.frame_index,
                sample.width_px,
                severity,
            ));
        }

        if sample.width_px > self.max_width_threshold {
            let severity = if sample.width_px <= 1.1 * self.max_width_threshold {
                AlertSeverity::Warning
            } else {
                AlertSeverity::Critical
            };
            debug!(
                "Width above maximum at frame {} ({:.2}px > {:.2}px, {})",
                sample.frame_index, sample.width_px, self.max_width_threshold, severity
            );
            return Some(Alert::above_max(
                sample.frame_index,
                sample.width_px,
                severity,
            ));
        }

        None
    }
}
