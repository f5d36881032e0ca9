//! Belt segments delimited by seam detections.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A contiguous run of belt between two seams.
///
/// Segments are closed intervals over frame indices: both `frame_start`
/// and `frame_end` carry measurements that belong to the segment. The
/// width statistics are frozen when the segment is closed and summarize
/// every sample observed between those two frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    /// Segment identifier, starting at 1 for each analysis run
    pub segment_id: u64,

    /// Frame index of the first measurement in the segment
    pub frame_start: u64,

    /// Frame index of the last measurement in the segment
    pub frame_end: u64,

    /// Smallest width observed in the segment (pixels)
    pub min_width_px: f64,

    /// Largest width observed in the segment (pixels)
    pub max_width_px: f64,

    /// Mean width over all measurements in the segment (pixels)
    pub avg_width_px: f64,

    /// Population variance of the widths (pixels squared)
    pub width_variance: f64,

    /// Number of measurements folded into the segment
    pub measurement_count: u64,
}

impl Segment {
    /// Number of frames the segment spans, inclusive of both ends.
    pub fn frame_span(&self) -> u64 {
        self.frame_end - self.frame_start + 1
    }

    /// Spread between the widest and narrowest measurement (pixels).
    pub fn width_range(&self) -> f64 {
        self.max_width_px - self.min_width_px
    }
}
