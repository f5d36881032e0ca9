//! Width anomaly alerts raised during analysis.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which configured bound a measurement violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Measured width fell below the configured minimum
    WidthBelowMin,
    /// Measured width exceeded the configured maximum
    WidthAboveMax,
}

impl AlertKind {
    /// Returns the kind as a string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WidthBelowMin => "width_below_min",
            Self::WidthAboveMax => "width_above_max",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How far outside the safe band the measurement landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Out of bounds, but within 10% of the violated threshold
    Warning,
    /// More than 10% past the violated threshold
    Critical,
}

impl AlertSeverity {
    /// Returns the severity as a string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Returns true if the severity is critical.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An out-of-bounds width observation.
///
/// Alerts are ordinary analysis output, not errors: a width excursion is
/// recorded and the run continues. At most one alert is raised per sample,
/// since a width cannot be below the minimum and above the maximum at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Alert {
    /// Which bound was violated
    pub kind: AlertKind,

    /// Frame the offending measurement came from
    pub frame: u64,

    /// The measured width (pixels)
    pub width_px: f64,

    /// Human-readable description of the violation
    pub message: String,

    /// How severe the excursion is
    pub severity: AlertSeverity,
}

impl Alert {
    /// Create an alert for a width below the minimum threshold.
    pub fn below_min(frame: u64, width_px: f64, severity: AlertSeverity) -> Self {
        Self {
            kind: AlertKind::WidthBelowMin,
            frame,
            width_px,
            message: format!("Belt width below threshold: {:.2}px", width_px),
            severity,
        }
    }

    /// Create an alert for a width above the maximum threshold.
    pub fn above_max(frame: u64, width_px: f64, severity: AlertSeverity) -> Self {
        Self {
            kind: AlertKind::WidthAboveMax,
            frame,
            width_px,
            message: format!("Belt width above threshold: {:.2}px", width_px),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_kind_as_str() {
        assert_eq!(AlertKind::WidthBelowMin.as_str(), "width_below_min");
        assert_eq!(AlertKind::WidthAboveMax.as_str(), "width_above_max");
    }

    #[test]
    fn test_severity_is_critical() {
        assert!(!AlertSeverity::Warning.is_critical());
        assert!(AlertSeverity::Critical.is_critical());
    }

    #[test]
    fn test_below_min_message_formats_two_decimals() {
        let alert = Alert::below_min(42, 87.5, AlertSeverity::Critical);
        assert_eq!(alert.kind, AlertKind::WidthBelowMin);
        assert_eq!(alert.frame, 42);
        assert_eq!(alert.message, "Belt width below threshold: 87.50px");
    }

    #[test]
    fn test_above_max_message_formats_two_decimals() {
        let alert = Alert::above_max(7, 2150.125, AlertSeverity::Warning);
        assert_eq!(alert.kind, AlertKind::WidthAboveMax);
        assert_eq!(alert.message, "Belt width above threshold: 2150.12px");
    }

    #[test]
    fn test_kind_and_severity_serialize_snake_case() {
        let alert = Alert::above_max(3, 2300.0, AlertSeverity::Critical);
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["kind"], "width_above_max");
        assert_eq!(json["severity"], "critical");
    }
}
