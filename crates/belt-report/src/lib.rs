//! Report writers for belt analysis results.
//!
//! Renders a finished [`belt_models::AnalysisResult`] into files an
//! operator can consume: a CSV segment table and a timestamped JSON
//! document.

pub mod error;
pub mod writer;

pub use error::{ReportError, ReportResult};
pub use writer::{ReportPaths, ReportWriter};
