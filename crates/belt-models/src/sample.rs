//! Per-frame width measurements.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single belt width measurement taken from one video frame.
///
/// Samples are the input unit of the analyzer. The measurement pipeline
/// emits one sample per frame in which the belt was measurable, tagged
/// with the frame it came from. Frames where measurement failed are
/// simply absent from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WidthSample {
    /// Index of the video frame this measurement came from (0-based)
    pub frame_index: u64,

    /// Measured belt width in pixels
    pub width_px: f64,
}

impl WidthSample {
    /// Create a new sample.
    pub fn new(frame_index: u64, width_px: f64) -> Self {
        Self {
            frame_index,
            width_px,
        }
    }
}
