use super::writing::{KurtosisShape, SkewnessShape, render_sentence};
use crate::analysis::Moments;
use crate::error::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the report written by [`ReportGenerator::write_report_to_file`].
pub const REPORT_FILE_NAME: &str = "analysis_report.json";

// ============================================================================
// Report Types
// ============================================================================

/// Record of one analysis run.
///
/// Use this for both JSON output (`--json`) and file writing (`--emit-report`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path to the input file
    pub input_file: String,
    /// Column the moments describe
    pub target_column: String,
    /// Rows and columns of the loaded dataset
    pub shape: (usize, usize),
    pub moments: Moments,
    pub skewness_shape: SkewnessShape,
    pub kurtosis_shape: KurtosisShape,
    /// The printed interpretation
    pub interpretation: String,
    /// Imputation steps, one per filled column
    pub processing_steps: Vec<String>,
    pub charts: ChartFiles,
}

/// Paths of the images written during the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFiles {
    pub correlation_heatmap: PathBuf,
    pub relational: PathBuf,
    pub statistical: PathBuf,
    pub categorical: PathBuf,
}

/// Inputs for [`ReportGenerator::build_report`].
pub struct ReportParams<'a> {
    pub input_file: &'a Path,
    pub target_column: &'a str,
    pub shape: (usize, usize),
    pub moments: Moments,
    pub processing_steps: &'a [String],
    pub charts: ChartFiles,
}

pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl ReportGenerator {
    /// Create a new ReportGenerator writing into `output_dir`.
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Assemble the report, classifying the moments and rendering the
    /// interpretation text.
    pub fn build_report(params: ReportParams<'_>) -> AnalysisReport {
        let ReportParams {
            input_file,
            target_column,
            shape,
            moments,
            processing_steps,
            charts,
        } = params;

        AnalysisReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.display().to_string(),
            target_column: target_column.to_string(),
            shape,
            moments,
            skewness_shape: SkewnessShape::classify(moments.skewness),
            kurtosis_shape: KurtosisShape::classify(moments.excess_kurtosis),
            interpretation: render_sentence(&moments, target_column),
            processing_steps: processing_steps.to_vec(),
            charts,
        }
    }

    /// Pretty JSON form of `report`.
    pub fn to_json(report: &AnalysisReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    /// Write `report` as pretty JSON to `<output_dir>/analysis_report.json`.
    pub fn write_report_to_file(&self, report: &AnalysisReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self.output_dir.join(REPORT_FILE_NAME);
        let mut file = File::create(&report_path)?;
        file.write_all(Self::to_json(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_report() -> AnalysisReport {
        let steps = vec!["Filled 'money' with mean: 3.00".to_string()];
        ReportGenerator::build_report(ReportParams {
            input_file: Path::new("data.csv"),
            target_column: "money",
            shape: (5, 4),
            moments: Moments::from_values(&[1.0, 1.0, 1.0, 2.0, 10.0]),
            processing_steps: &steps,
            charts: ChartFiles {
                correlation_heatmap: PathBuf::from("correlation_heatmap.png"),
                relational: PathBuf::from("relational_plot.png"),
                statistical: PathBuf::from("statistical_plot.png"),
                categorical: PathBuf::from("categorical_plot.png"),
            },
        })
    }

    #[test]
    fn test_build_report_classifies_moments() {
        let report = sample_report();
        assert_eq!(report.skewness_shape, SkewnessShape::RightSkewed);
        assert_eq!(report.kurtosis_shape, KurtosisShape::Leptokurtic);
        assert!(report.interpretation.starts_with("For the attribute 'money':"));
        assert_eq!(report.input_file, "data.csv");
    }

    #[test]
    fn test_json_fields() {
        let json = ReportGenerator::to_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["target_column"], "money");
        assert_eq!(value["skewness_shape"], "right-skewed");
        assert_eq!(value["moments"]["mean"], 3.0);
        assert_eq!(value["charts"]["relational"], "relational_plot.png");
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ReportGenerator::new(dir.path().join("reports"));

        let path = generator.write_report_to_file(&sample_report()).unwrap();
        assert_eq!(path, dir.path().join("reports").join(REPORT_FILE_NAME));

        let written: AnalysisReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.shape, (5, 4));
        assert_eq!(written.processing_steps.len(), 1);
    }
}
