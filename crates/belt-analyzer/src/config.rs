//! Configuration for analysis runs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Reference width that seam deviation is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BaselineMode {
    /// Compare against the running average of the open segment.
    /// Adapts to gradual drift while still flagging abrupt jumps.
    #[default]
    Adaptive,

    /// Compare against a fixed nominal width.
    /// Deviations accumulate: a belt that drifts away from the reference
    /// keeps splitting, which makes drift visible in the segment list.
    Fixed {
        /// Nominal belt width to compare against (pixels)
        reference_px: f64,
    },
}

impl BaselineMode {
    /// Returns true if this is the adaptive (running average) mode.
    pub fn is_adaptive(&self) -> bool {
        matches!(self, Self::Adaptive)
    }
}

/// Configuration for one analysis run.
///
/// All values are validated up front: a run over a bad configuration
/// fails before the first sample is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzerConfig {
    /// Lower width tolerance bound in pixels (default: 100.0).
    /// Samples below this raise a `width_below_min` alert.
    pub min_width_threshold: f64,

    /// Upper width tolerance bound in pixels (default: 2000.0).
    /// Must be greater than `min_width_threshold`.
    pub max_width_threshold: f64,

    /// Relative deviation from the baseline that closes a segment
    /// (default: 0.3). Fraction in (0, 1]; lower values split more
    /// aggressively.
    pub seam_threshold: f64,

    /// Minimum samples a segment must hold before a seam can close it
    /// (default: 2). Prevents a freshly opened segment from re-splitting
    /// on its very next sample, when the running average is still a
    /// single observation.
    pub warmup_count: u32,

    /// Baseline the seam deviation is measured against.
    #[serde(default)]
    pub baseline: BaselineMode,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_width_threshold: 100.0,
            max_width_threshold: 2000.0,
            seam_threshold: 0.3,
            warmup_count: 2,
            baseline: BaselineMode::Adaptive,
        }
    }
}

impl AnalyzerConfig {
    /// Builder: Set the width tolerance bounds.
    pub fn with_width_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_width_threshold = min;
        self.max_width_threshold = max;
        self
    }

    /// Builder: Set the seam threshold.
    pub fn with_seam_threshold(mut self, threshold: f64) -> Self {
        self.seam_threshold = threshold;
        self
    }

    /// Builder: Set the warm-up count.
    pub fn with_warmup_count(mut self, count: u32) -> Self {
        self.warmup_count = count;
        self
    }

    /// Builder: Set the baseline mode.
    pub fn with_baseline(mut self, baseline: BaselineMode) -> Self {
        self.baseline = baseline;
        self
    }

    /// Builder: Use a fixed reference width as the seam baseline.
    pub fn with_fixed_baseline(self, reference_px: f64) -> Self {
        self.with_baseline(BaselineMode::Fixed { reference_px })
    }

    /// Validate every field.
    ///
    /// # Errors
    /// Returns the first violated constraint. Non-finite values are
    /// rejected along with out-of-domain ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_width_threshold.is_finite() || self.min_width_threshold <= 0.0 {
            return Err(ConfigError::InvalidMinWidth(self.min_width_threshold));
        }

        if !self.max_width_threshold.is_finite()
            || self.max_width_threshold <= self.min_width_threshold
        {
            return Err(ConfigError::InvalidWidthBounds {
                min: self.min_width_threshold,
                max: self.max_width_threshold,
            });
        }

        if !self.seam_threshold.is_finite()
            || self.seam_threshold <= 0.0
            || self.seam_threshold > 1.0
        {
            return Err(ConfigError::InvalidSeamThreshold(self.seam_threshold));
        }

        if self.warmup_count == 0 {
            return Err(ConfigError::InvalidWarmupCount);
        }

        if let BaselineMode::Fixed { reference_px } = self.baseline {
            if !reference_px.is_finite() || reference_px <= 0.0 {
                return Err(ConfigError::InvalidBaselineReference(reference_px));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.min_width_threshold - 100.0).abs() < f64::EPSILON);
        assert!((config.max_width_threshold - 2000.0).abs() < f64::EPSILON);
        assert!((config.seam_threshold - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.warmup_count, 2);
        assert!(config.baseline.is_adaptive());
    }

    #[test]
    fn test_builder_pattern() {
        let config = AnalyzerConfig::default()
            .with_width_bounds(200.0, 900.0)
            .with_seam_threshold(0.15)
            .with_warmup_count(5)
            .with_fixed_baseline(450.0);

        assert!((config.min_width_threshold - 200.0).abs() < f64::EPSILON);
        assert!((config.max_width_threshold - 900.0).abs() < f64::EPSILON);
        assert!((config.seam_threshold - 0.15).abs() < f64::EPSILON);
        assert_eq!(config.warmup_count, 5);
        assert_eq!(config.baseline, BaselineMode::Fixed { reference_px: 450.0 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = AnalyzerConfig::default().with_width_bounds(500.0, 500.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWidthBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_min_width() {
        let config = AnalyzerConfig::default().with_width_bounds(0.0, 2000.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMinWidth(_))
        ));

        let config = AnalyzerConfig::default().with_width_bounds(f64::NAN, 2000.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMinWidth(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_domain_seam_threshold() {
        for bad in [0.0, -0.2, 1.01, f64::NAN, f64::INFINITY] {
            let config = AnalyzerConfig::default().with_seam_threshold(bad);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidSeamThreshold(_))),
                "seam_threshold {} should be rejected",
                bad
            );
        }

        // 1.0 is the inclusive upper edge of the domain
        let config = AnalyzerConfig::default().with_seam_threshold(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_warmup() {
        let config = AnalyzerConfig::default().with_warmup_count(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWarmupCount)
        ));
    }

    #[test]
    fn test_rejects_bad_fixed_reference() {
        let config = AnalyzerConfig::default().with_fixed_baseline(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaselineReference(_))
        ));
    }

    #[test]
    fn test_baseline_mode_serializes_tagged() {
        let adaptive = serde_json::to_value(BaselineMode::Adaptive).unwrap();
        assert_eq!(adaptive["mode"], "adaptive");

        let fixed = serde_json::to_value(BaselineMode::Fixed { reference_px: 480.0 }).unwrap();
        assert_eq!(fixed["mode"], "fixed");
        assert_eq!(fixed["reference_px"], 480.0);
    }

    #[test]
    fn test_baseline_defaults_to_adaptive_when_absent() {
        let config: AnalyzerConfig = serde_json::from_str(
            r#"{
                "min_width_threshold": 100.0,
                "max_width_threshold": 2000.0,
                "seam_threshold": 0.3,
                "warmup_count": 2
            }"#,
        )
        .unwrap();
        assert!(config.baseline.is_adaptive());
    }
}
