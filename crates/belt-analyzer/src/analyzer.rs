//! Full-pass analysis driver.

use belt_models::{AnalysisResult, SourceInfo, WidthSample};
use tracing::info;

use crate::anomaly::AnomalyDetector;
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::segmentation::SegmentationEngine;

/// Single-pass belt width analyzer.
///
/// Drives the segmentation engine and the anomaly detector over one
/// width signal and assembles the immutable [`AnalysisResult`]. Every
/// call to [`BeltAnalyzer::analyze`] runs with fresh state (segment
/// numbering restarts at 1), so independent analyses can run in
/// parallel, each on its own analyzer or a shared reference.
#[derive(Debug, Clone, Default)]
pub struct BeltAnalyzer {
    config: AnalyzerConfig,
}

impl BeltAnalyzer {
    /// Create an analyzer with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// The configuration this analyzer runs with.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one width signal.
    ///
    /// Consumes the samples exactly once, in order. The signal must be
    /// finite; an empty signal yields a valid result with zero segments.
    /// `source` describes where the samples came from and is passed
    /// through into the result untouched.
    ///
    /// # Errors
    /// - [`AnalyzerError::Config`] if the configuration is invalid;
    ///   no sample is consumed in that case.
    /// - [`AnalyzerError::OutOfOrderFrame`] if a frame index is not
    ///   strictly greater than its predecessor's.
    /// - [`AnalyzerError::InvalidWidth`] if a width is non-positive or
    ///   not finite.
    pub fn analyze<I>(&self, signal: I, source: SourceInfo) -> AnalyzerResult<AnalysisResult>
    where
        I: IntoIterator<Item = WidthSample>,
    {
        self.config.validate()?;

        let mut engine = SegmentationEngine::new(&self.config);
        let detector = AnomalyDetector::new(&self.config);

        let mut segments = Vec::new();
        let mut alerts = Vec::new();
        let mut prev_frame: Option<u64> = None;
        let mut sample_count: u64 = 0;

        for sample in signal {
            if let Some(prev) = prev_frame {
                if sample.frame_index <= prev {
                    return Err(AnalyzerError::out_of_order(prev, sample.frame_index));
                }
            }
            if !sample.width_px.is_finite() || sample.width_px <= 0.0 {
                return Err(AnalyzerError::invalid_width(
                    sample.frame_index,
                    sample.width_px,
                ));
            }
            prev_frame = Some(sample.frame_index);
            sample_count += 1;

            if let Some(closed) = engine.ingest(&sample) {
                segments.push(closed);
            }
            if let Some(alert) = detector.check(&sample) {
                alerts.push(alert);
            }
        }

        if let Some(last) = engine.finish() {
            segments.push(last);
        }

        info!(
            "Analysis complete. Found {} segments, {} alerts in {} samples",
            segments.len(),
            alerts.len(),
            sample_count
        );

        Ok(AnalysisResult::new(source, segments, alerts))
    }
}
