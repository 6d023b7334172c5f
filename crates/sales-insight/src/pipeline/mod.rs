//! The end-to-end analysis run.
//!
//! Stages execute strictly in order and the first failure ends the run:
//!
//! 1. load the CSV
//! 2. preprocess (diagnostics, mean imputation, correlation heatmap)
//! 3. relational, statistical and categorical charts
//! 4. moments of the target column
//! 5. interpretation

use crate::analysis::statistical_analysis;
use crate::charts::{categorical_plot, relational_plot, statistical_plot};
use crate::config::AnalysisConfig;
use crate::error::{Result, ResultExt};
use crate::loader::load_dataset;
use crate::preprocessing::preprocess_with_outcome;
use crate::reporting::{AnalysisReport, ChartFiles, ReportGenerator, ReportParams, writing};
use std::fs;
use std::time::Instant;
use tracing::{debug, error, info};

/// Run the whole analysis described by `config`.
///
/// Charts are written to `config.output_dir`, which is created if needed.
/// Returns the report of the run; nothing is retained afterwards.
pub fn run(config: &AnalysisConfig) -> Result<AnalysisReport> {
    match run_internal(config) {
        Ok(report) => Ok(report),
        Err(e) => {
            error!("Analysis failed: {}", e);
            Err(e)
        }
    }
}

fn run_internal(config: &AnalysisConfig) -> Result<AnalysisReport> {
    let start_time = Instant::now();
    config.validate()?;

    info!("Step 1: Loading {}", config.input_path.display());
    let df = load_dataset(&config.input_path)?;
    let shape = df.shape();

    fs::create_dir_all(&config.output_dir).context(format!(
        "Failed to create output directory {}",
        config.output_dir.display()
    ))?;

    info!("Step 2: Preprocessing...");
    let (df, outcome) = preprocess_with_outcome(df, config)?;

    info!("Step 3: Rendering charts...");
    let relational = relational_plot(&df, config)?;
    let statistical = statistical_plot(&df, config)?;
    let categorical = categorical_plot(&df, config)?;

    info!("Step 4: Computing moments of '{}'", config.target_column);
    let moments = statistical_analysis(&df, &config.target_column)?;

    if config.print_interpretation {
        writing(&moments, &config.target_column);
    }

    let report = ReportGenerator::build_report(ReportParams {
        input_file: &config.input_path,
        target_column: &config.target_column,
        shape,
        moments,
        processing_steps: &outcome.processing_steps,
        charts: ChartFiles {
            correlation_heatmap: outcome.heatmap_path,
            relational,
            statistical,
            categorical,
        },
    });

    debug!(
        duration_ms = start_time.elapsed().as_millis() as u64,
        "Analysis complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let config = AnalysisConfig::builder()
            .input_path(dir.path().join("absent.csv"))
            .output_dir(&out)
            .build()
            .unwrap();

        let err = run(&config).unwrap_err();
        assert_eq!(err.error_code(), "INPUT_NOT_FOUND");
        assert!(!out.exists());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnalysisConfig {
            head_rows: 0,
            ..AnalysisConfig::default()
        };
        let err = run(&config).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_run_small_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.csv");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "hour_of_day,money,Time_of_Day,coffee_name").unwrap();
        writeln!(file, "10,38.7,Morning,Latte").unwrap();
        writeln!(file, "12,28.9,Afternoon,Americano").unwrap();
        writeln!(file, "19,,Night,Latte").unwrap();
        writeln!(file, "20,33.8,Night,Cortado").unwrap();
        drop(file);

        let config = AnalysisConfig::builder()
            .input_path(&input)
            .output_dir(dir.path())
            .print_diagnostics(false)
            .print_interpretation(false)
            .build()
            .unwrap();

        let report = run(&config).unwrap();
        assert_eq!(report.shape, (4, 4));
        assert_eq!(report.processing_steps.len(), 1);
        assert!(report.charts.correlation_heatmap.exists());
        assert!(report.charts.relational.exists());
        assert!(report.charts.statistical.exists());
        assert!(report.charts.categorical.exists());
        // Imputed value equals the mean, so the mean is unchanged.
        assert!((report.moments.mean - 33.8).abs() < 1e-9);
    }
}
