//! Error types for analysis runs.

use thiserror::Error;

/// Result type for analysis operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Configuration errors, raised before any sample is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_width_threshold must be a positive number, got {0}")]
    InvalidMinWidth(f64),

    #[error("max_width_threshold ({max}) must be greater than min_width_threshold ({min})")]
    InvalidWidthBounds { min: f64, max: f64 },

    #[error("seam_threshold must be in (0, 1], got {0}")]
    InvalidSeamThreshold(f64),

    #[error("warmup_count must be at least 1")]
    InvalidWarmupCount,

    #[error("fixed baseline reference must be a positive width, got {0}")]
    InvalidBaselineReference(f64),
}

/// Errors that can occur during an analysis run.
///
/// Out-of-tolerance widths are not errors; they are reported as alerts
/// in the result. Only configuration and input contract violations abort
/// a run.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Out-of-order sample: frame {frame} arrived after frame {prev}")]
    OutOfOrderFrame { prev: u64, frame: u64 },

    #[error("Invalid width at frame {frame}: {width}")]
    InvalidWidth { frame: u64, width: f64 },
}

impl AnalyzerError {
    /// Create an out-of-order frame error.
    pub fn out_of_order(prev: u64, frame: u64) -> Self {
        Self::OutOfOrderFrame { prev, frame }
    }

    /// Create an invalid width error.
    pub fn invalid_width(frame: u64, width: f64) -> Self {
        Self::InvalidWidth { frame, width }
    }
}
