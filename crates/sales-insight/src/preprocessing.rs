//! Pre-analysis cleaning: diagnostics, mean imputation and the correlation
//! heatmap.

use crate::analysis::CorrelationMatrix;
use crate::charts::correlation_heatmap;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::imputers::MeanImputer;
use crate::profiler::DatasetSummary;
use polars::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info};

/// What preprocessing did to the dataset.
#[derive(Debug, Clone)]
pub struct PreprocessOutcome {
    pub summary: DatasetSummary,
    pub processing_steps: Vec<String>,
    pub correlation: CorrelationMatrix,
    pub heatmap_path: PathBuf,
}

/// Clean `df` in place and return the cleaned frame.
///
/// Prints the dataset summary (unless disabled in `config`), fills missing
/// numeric values with their column mean and renders the correlation heatmap
/// of the numeric columns.
pub fn preprocess(df: DataFrame, config: &AnalysisConfig) -> Result<DataFrame> {
    let (df, _) = preprocess_with_outcome(df, config)?;
    Ok(df)
}

/// Same as [`preprocess`], also returning what was done.
pub fn preprocess_with_outcome(
    mut df: DataFrame,
    config: &AnalysisConfig,
) -> Result<(DataFrame, PreprocessOutcome)> {
    let summary = DatasetSummary::from_frame(&df, config.head_rows)?;
    if config.print_diagnostics {
        summary.print()?;
    }
    debug!(
        missing = summary.null_counts.total(),
        "Profiled dataset before imputation"
    );

    let mut processing_steps = Vec::new();
    MeanImputer::impute_numeric_columns(&mut df, &mut processing_steps)?;
    info!(
        columns_imputed = processing_steps.len(),
        "Imputed numeric columns"
    );

    if config.print_diagnostics {
        println!("\n----- CORRELATION HEATMAP -----");
    }
    let correlation = CorrelationMatrix::from_frame(&df)?;
    let heatmap_path = correlation_heatmap(&correlation, config)?;

    Ok((
        df,
        PreprocessOutcome {
            summary,
            processing_steps,
            correlation,
            heatmap_path,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn quiet_config(dir: &std::path::Path) -> AnalysisConfig {
        AnalysisConfig::builder()
            .output_dir(dir)
            .print_diagnostics(false)
            .build()
            .unwrap()
    }

    #[test]
    fn test_preprocess_fills_numeric_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let df = df![
            "hour_of_day" => [Some(10i64), Some(12), Some(14)],
            "money" => [Some(1.0), None, Some(3.0)],
            "coffee_name" => [Some("Latte"), None, Some("Mocha")],
        ]
        .unwrap();

        let (cleaned, outcome) = preprocess_with_outcome(df, &quiet_config(dir.path())).unwrap();

        let money = cleaned.column("money").unwrap();
        assert_eq!(money.null_count(), 0);
        assert_eq!(money.get(1).unwrap().try_extract::<f64>().unwrap(), 2.0);
        assert_eq!(cleaned.column("coffee_name").unwrap().null_count(), 1);
        assert_eq!(outcome.processing_steps.len(), 1);
        assert_eq!(outcome.summary.null_counts.get("money"), Some(1));
        assert!(outcome.heatmap_path.exists());
    }

    #[test]
    fn test_preprocess_fills_nan() {
        let dir = tempfile::tempdir().unwrap();
        let df = df![
            "hour_of_day" => [9i64, 10, 11],
            "money" => [1.0, f64::NAN, 3.0],
        ]
        .unwrap();

        let (cleaned, outcome) = preprocess_with_outcome(df, &quiet_config(dir.path())).unwrap();

        let money = cleaned.column("money").unwrap();
        assert_eq!(money.get(1).unwrap().try_extract::<f64>().unwrap(), 2.0);
        assert_eq!(outcome.summary.null_counts.get("money"), Some(1));
        assert_eq!(outcome.processing_steps.len(), 1);
    }

    #[test]
    fn test_preprocess_twice_is_identity_on_numeric_columns() {
        let dir = tempfile::tempdir().unwrap();
        let config = quiet_config(dir.path());
        let df = df![
            "hour_of_day" => [Some(9i64), None, Some(11), Some(15)],
            "money" => [Some(30.0), Some(32.0), None, Some(40.0)],
        ]
        .unwrap();

        let once = preprocess(df, &config).unwrap();
        let twice = preprocess(once.clone(), &config).unwrap();
        assert!(twice.equals_missing(&once));
    }

    #[test]
    fn test_preprocess_without_numeric_columns_fails() {
        let dir = tempfile::tempdir().unwrap();
        let df = df!["coffee_name" => ["Latte", "Mocha"]].unwrap();

        let err = preprocess(df, &quiet_config(dir.path())).unwrap_err();
        assert_eq!(err.error_code(), "CHART_RENDERING_FAILED");
    }
}
