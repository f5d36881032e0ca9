//! Belt segmentation using relative width deviation.
//!
//! Splits the width signal into segments at detected seams (physical
//! joins/splices), which show up as abrupt width changes against the
//! segment's baseline width.
//!
//! # Algorithm
//!
//! 1. The first sample opens segment 1
//! 2. Every later sample is compared against the open segment's baseline
//!    (its running average width, or a fixed reference)
//! 3. Once the segment holds at least `warmup_count` samples, a relative
//!    deviation above `seam_threshold` closes it; the triggering sample
//!    seeds the next segment
//! 4. End of stream closes whatever segment is still open

use belt_models::{Segment, WidthSample};
use tracing::debug;

use crate::config::{AnalyzerConfig, BaselineMode};

/// Running statistics for the currently open segment.
///
/// The accumulator is folded over samples as a value: `absorb` consumes
/// it and returns the updated state. Its aggregates (min, max, sum, sum
/// of squares) are commutative, so the frozen statistics do not depend
/// on fold order.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentAccumulator {
    segment_id: u64,
    frame_start: u64,
    frame_end: u64,
    min_width: f64,
    max_width: f64,
    sum_width: f64,
    sum_width_sq: f64,
    count: u64,
}

impl SegmentAccumulator {
    /// Open a new accumulator seeded with its first sample.
    pub fn seed(segment_id: u64, sample: &WidthSample) -> Self {
        Self {
            segment_id,
            frame_start: sample.frame_index,
            frame_end: sample.frame_index,
            min_width: sample.width_px,
            max_width: sample.width_px,
            sum_width: sample.width_px,
            sum_width_sq: sample.width_px * sample.width_px,
            count: 1,
        }
    }

    /// Fold one more sample into the accumulator.
    pub fn absorb(mut self, sample: &WidthSample) -> Self {
        self.frame_end = sample.frame_index;
        self.min_width = self.min_width.min(sample.width_px);
        self.max_width = self.max_width.max(sample.width_px);
        self.sum_width += sample.width_px;
        self.sum_width_sq += sample.width_px * sample.width_px;
        self.count += 1;
        self
    }

    /// Running average width of the samples absorbed so far.
    pub fn running_avg(&self) -> f64 {
        self.sum_width / self.count as f64
    }

    /// Number of samples absorbed so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Freeze the accumulator into an immutable segment.
    ///
    /// The variance is the population variance of the absorbed widths;
    /// a single-sample segment reports 0.0.
    pub fn finalize(self) -> Segment {
        let avg = self.sum_width / self.count as f64;
        let variance = if self.count < 2 {
            0.0
        } else {
            // Clamp tiny negative values from floating-point cancellation
            (self.sum_width_sq / self.count as f64 - avg * avg).max(0.0)
        };

        Segment {
            segment_id: self.segment_id,
            frame_start: self.frame_start,
            frame_end: self.frame_end,
            min_width_px: self.min_width,
            max_width_px: self.max_width,
            avg_width_px: avg,
            width_variance: variance,
            measurement_count: self.count,
        }
    }
}

/// Streaming seam detector.
///
/// Consumes one sample at a time and emits a frozen segment whenever a
/// seam closes one. Exactly one segment is open from the first sample
/// until the stream ends, so every sample lands in exactly one segment.
/// Segment identifiers start at 1 and are scoped to the engine instance;
/// a fresh engine restarts the numbering.
#[derive(Debug)]
pub struct SegmentationEngine {
    seam_threshold: f64,
    warmup_count: u32,
    baseline: BaselineMode,
    current: Option<SegmentAccumulator>,
    segment_counter: u64,
}

impl SegmentationEngine {
    /// Create an engine for one pass over a width signal.
    ///
    /// The configuration is expected to be validated; see
    /// [`AnalyzerConfig::validate`].
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            seam_threshold: config.seam_threshold,
            warmup_count: config.warmup_count,
            baseline: config.baseline,
            current: None,
            segment_counter: 0,
        }
    }

    /// Feed one sample. Returns the closed segment when the sample is a seam.
    ///
    /// The seam-triggering sample is not part of the returned segment; it
    /// becomes the first sample of the next one.
    pub fn ingest(&mut self, sample: &WidthSample) -> Option<Segment> {
        let current = match self.current.take() {
            Some(current) => current,
            None => {
                self.current = Some(self.open(sample));
                return None;
            }
        };

        if current.count() >= u64::from(self.warmup_count) {
            let baseline = match self.baseline {
                BaselineMode::Adaptive => current.running_avg(),
                BaselineMode::Fixed { reference_px } => reference_px,
            };
            let deviation = (sample.width_px - baseline).abs() / baseline;

            if deviation > self.seam_threshold {
                debug!(
                    "Seam detected at frame {} (deviation={:.3}, threshold={:.3})",
                    sample.frame_index, deviation, self.seam_threshold
                );
                let closed = current.finalize();
                self.current = Some(self.open(sample));
                return Some(closed);
            }
        }

        self.current = Some(current.absorb(sample));
        None
    }

    /// Close the still-open segment at end of stream, if any.
    ///
    /// A stream with zero samples never opened a segment, so this
    /// returns `None` for it.
    pub fn finish(&mut self) -> Option<Segment> {
        self.current.take().map(SegmentAccumulator::finalize)
    }

    fn open(&mut self, sample: &WidthSample) -> SegmentAccumulator {
        self.segment_counter += 1;
        SegmentAccumulator::seed(self.segment_counter, sample)
    }
}
