#![deny(unreachable_patterns)]
//! Belt width segmentation and anomaly detection.
//!
//! This crate provides:
//! - Single-pass segmentation of a width signal at detected seams
//! - Running per-segment width statistics (min/max/avg/variance)
//! - Tolerance-band anomaly alerts, independent of segmentation
//! - A driver that assembles everything into one immutable result
//!
//! The engine never touches video or files; it consumes an ordered
//! stream of per-frame width measurements produced upstream.

pub mod analyzer;
pub mod anomaly;
pub mod config;
pub mod error;
pub mod segmentation;

pub use analyzer::BeltAnalyzer;
pub use anomaly::AnomalyDetector;
pub use config::{AnalyzerConfig, BaselineMode};
pub use error::{AnalyzerError, AnalyzerResult, ConfigError};
pub use segmentation::{SegmentAccumulator, SegmentationEngine};
