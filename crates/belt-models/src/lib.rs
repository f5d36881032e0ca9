//! Shared data models for the belt width monitor.
//!
//! This crate provides Serde-serializable types for:
//! - Per-frame width samples emitted by the measurement pipeline
//! - Belt segments delimited by seam detections
//! - Width anomaly alerts
//! - Complete analysis results

pub mod alert;
pub mod result;
pub mod sample;
pub mod segment;

// Re-export common types
pub use alert::{Alert, AlertKind, AlertSeverity};
pub use result::{AnalysisResult, SourceInfo};
pub use sample::WidthSample;
pub use segment::Segment;
