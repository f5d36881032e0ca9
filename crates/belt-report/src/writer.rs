//! Report writers for analysis results.

use std::fs;
use std::path::{Path, PathBuf};

use belt_models::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::ReportResult;

/// Locations of the files produced by [`ReportWriter::write_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// JSON report payload: the analysis result plus a generation timestamp.
///
/// The timestamp lives here rather than in the result itself, so the
/// result stays deterministic and only the rendered report carries
/// wall-clock time.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    generated_at: DateTime<Utc>,
}

/// Writes analysis results to report files under a fixed output directory.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer rooted at `output_dir`, creating the directory
    /// (and any missing parents) if needed.
    pub fn new(output_dir: impl Into<PathBuf>) -> ReportResult<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Directory the reports are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write a CSV report with one row per segment.
    ///
    /// Width columns are rounded to two decimals. Alerts are not part of
    /// the CSV; it is meant for spreadsheet import of the segment table.
    pub fn write_csv(&self, result: &AnalysisResult, filename: &str) -> ReportResult<PathBuf> {
        let filepath = self.output_dir.join(filename);

        let mut content = String::from(
            "segment_id,frame_start,frame_end,min_width_px,max_width_px,avg_width_px,variance,measurement_count\n",
        );
        for segment in &result.segments {
            content.push_str(&format!(
                "{},{},{},{:.2},{:.2},{:.2},{:.2},{}\n",
                segment.segment_id,
                segment.frame_start,
                segment.frame_end,
                segment.min_width_px,
                segment.max_width_px,
                segment.avg_width_px,
                segment.width_variance,
                segment.measurement_count
            ));
        }

        fs::write(&filepath, content)?;
        info!("CSV report saved: {}", filepath.display());
        Ok(filepath)
    }

    /// Write a pretty-printed JSON report.
    ///
    /// The document is the serialized result with a `generated_at`
    /// timestamp added at the top level.
    pub fn write_json(&self, result: &AnalysisResult, filename: &str) -> ReportResult<PathBuf> {
        let filepath = self.output_dir.join(filename);

        let report = JsonReport {
            result,
            generated_at: Utc::now(),
        };
        fs::write(&filepath, serde_json::to_string_pretty(&report)?)?;

        info!("JSON report saved: {}", filepath.display());
        Ok(filepath)
    }

    /// Write reports in every format, deriving file names from `base_name`.
    ///
    /// When `base_name` is `None`, a timestamped `belt_analysis_*` name
    /// is used.
    pub fn write_all(
        &self,
        result: &AnalysisResult,
        base_name: Option<&str>,
    ) -> ReportResult<ReportPaths> {
        let base_name = match base_name {
            Some(name) => name.to_string(),
            None => format!("belt_analysis_{}", Utc::now().format("%Y%m%d_%H%M%S")),
        };

        let paths = ReportPaths {
            csv: self.write_csv(result, &format!("{}.csv", base_name))?,
            json: self.write_json(result, &format!("{}.json", base_name))?,
        };

        info!("Generated reports: {:?}", paths);
        Ok(paths)
    }
}
