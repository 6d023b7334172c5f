//! Coffee Sales Analysis Library
//!
//! Exploratory analysis of a tabular sales dataset built on Polars and
//! plotters.
//!
//! # Overview
//!
//! A run is a single linear pipeline:
//!
//! - **Loading**: read the CSV with a fully inferred schema
//! - **Preprocessing**: print head, info, describe and null counts, fill
//!   missing numeric values with the column mean, render a correlation heatmap
//! - **Visualization**: relational, statistical and categorical charts as PNG
//! - **Analysis**: mean, standard deviation, skewness and excess kurtosis of
//!   the target column
//! - **Reporting**: a plain-language interpretation, optionally a JSON report
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sales_insight::{run, AnalysisConfig};
//!
//! // Defaults read ./data.csv and analyse the `money` column
//! let report = run(&AnalysisConfig::default())?;
//! println!("Skewness: {:.2}", report.moments.skewness);
//! ```
//!
//! # Using the stages directly
//!
//! ```rust,ignore
//! use sales_insight::{load_dataset, preprocess, statistical_analysis, writing, AnalysisConfig};
//!
//! let config = AnalysisConfig::builder()
//!     .output_dir("charts")
//!     .print_diagnostics(false)
//!     .build()?;
//!
//! let df = preprocess(load_dataset("data.csv")?, &config)?;
//! let moments = statistical_analysis(&df, "money")?;
//! writing(&moments, "money");
//! ```

pub mod analysis;
pub mod charts;
pub mod config;
pub mod error;
pub mod imputers;
pub mod loader;
pub mod pipeline;
pub mod preprocessing;
pub mod profiler;
pub mod reporting;
pub mod utils;

// Re-exports for convenient access
pub use analysis::{CorrelationMatrix, Moments, statistical_analysis};
pub use charts::{categorical_plot, correlation_heatmap, relational_plot, statistical_plot};
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ChartLayout, ChartSize, ConfigValidationError};
pub use error::{AnalysisError, Result, ResultExt};
pub use imputers::MeanImputer;
pub use loader::load_dataset;
pub use pipeline::run;
pub use preprocessing::{PreprocessOutcome, preprocess, preprocess_with_outcome};
pub use profiler::DatasetSummary;
pub use reporting::{
    AnalysisReport, KurtosisShape, ReportGenerator, SkewnessShape, render_sentence, writing,
};
