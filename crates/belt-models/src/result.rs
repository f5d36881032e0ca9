//! Top-level analysis results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Alert, Segment};

/// Provenance of the measurement stream fed to the analyzer.
///
/// The analyzer itself never reads video; whoever produced the samples
/// describes their origin here so the result can carry it through.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SourceInfo {
    /// Path or name of the video the widths were measured from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    /// Total number of frames in the source video
    pub total_frames: u64,

    /// Frame rate of the source video, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
}

impl SourceInfo {
    /// Create source info for a stream spanning `total_frames` frames.
    pub fn new(total_frames: u64) -> Self {
        Self {
            source_file: None,
            total_frames,
            fps: None,
        }
    }

    /// Set the originating file name.
    pub fn with_source_file(mut self, source_file: impl Into<String>) -> Self {
        self.source_file = Some(source_file.into());
        self
    }

    /// Set the source frame rate.
    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = Some(fps);
        self
    }
}

/// The complete outcome of one analysis run.
///
/// The result is a pure function of the input stream and configuration.
/// It carries no clock readings and no generated identifiers, so two runs
/// over the same data serialize byte-for-byte identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    /// Path or name of the analyzed video, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    /// Total number of frames in the source video
    pub total_frames: u64,

    /// Frame rate of the source video, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,

    /// Number of segments detected
    pub total_segments: u64,

    /// Detected segments in stream order
    pub segments: Vec<Segment>,

    /// Width alerts in stream order
    pub alerts: Vec<Alert>,
}

impl AnalysisResult {
    /// Assemble a result from the source description and detector output.
    pub fn new(source: SourceInfo, segments: Vec<Segment>, alerts: Vec<Alert>) -> Self {
        Self {
            source_file: source.source_file,
            total_frames: source.total_frames,
            fps: source.fps,
            total_segments: segments.len() as u64,
            segments,
            alerts,
        }
    }

    /// Number of alerts flagged critical.
    pub fn critical_alert_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.severity.is_critical())
            .count()
    }

    /// Total number of width measurements across all segments.
    pub fn total_measurements(&self) -> u64 {
        self.segments.iter().map(|s| s.measurement_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlertSeverity;

    fn segment(segment_id: u64, frame_start: u64, frame_end: u64, count: u64) -> Segment {
        Segment {
            segment_id,
            frame_start,
            frame_end,
            min_width_px: 490.0,
            max_width_px: 510.0,
            avg_width_px: 500.0,
            width_variance: 4.0,
            measurement_count: count,
        }
    }

    #[test]
    fn test_new_counts_segments() {
        let source = SourceInfo::new(100).with_source_file("belt.mp4").with_fps(30.0);
        let result = AnalysisResult::new(source, vec![segment(1, 0, 49, 50), segment(2, 50, 99, 50)], vec![]);
        assert_eq!(result.total_segments, 2);
        assert_eq!(result.total_frames, 100);
        assert_eq!(result.source_file.as_deref(), Some("belt.mp4"));
        assert_eq!(result.total_measurements(), 100);
    }

    #[test]
    fn test_critical_alert_count() {
        let alerts = vec![
            Alert::below_min(3, 95.0, AlertSeverity::Warning),
            Alert::below_min(4, 80.0, AlertSeverity::Critical),
            Alert::above_max(9, 2500.0, AlertSeverity::Critical),
        ];
        let result = AnalysisResult::new(SourceInfo::new(10), vec![], alerts);
        assert_eq!(result.critical_alert_count(), 2);
        assert_eq!(result.alerts.len(), 3);
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let result = AnalysisResult::new(SourceInfo::new(5), vec![], vec![]);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("source_file").is_none());
        assert!(json.get("fps").is_none());
        assert_eq!(json["total_frames"], 5);
        assert_eq!(json["total_segments"], 0);
    }

    #[test]
    fn test_identical_results_serialize_identically() {
        let build = || {
            AnalysisResult::new(
                SourceInfo::new(42).with_fps(25.0),
                vec![segment(1, 0, 41, 42)],
                vec![Alert::above_max(12, 2100.0, AlertSeverity::Warning)],
            )
        };
        let a = serde_json::to_string(&build()).unwrap();
        let b = serde_json::to_string(&build()).unwrap();
        assert_eq!(a, b);
    }
}
