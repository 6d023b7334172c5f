//! Configuration for an analysis run.
//!
//! Defaults reproduce the fixed behaviour of the tool: read `data.csv` from
//! the working directory, analyse the `money` column and write the four chart
//! images next to it. The builder only exists so tests and the CLI can point
//! the run somewhere else.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "data.csv";

/// Default column whose moments are reported.
pub const DEFAULT_TARGET_COLUMN: &str = "money";

/// Smallest chart edge accepted by [`AnalysisConfig::validate`].
pub const MIN_CHART_EDGE: u32 = 100;

/// Pixel size of a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl ChartSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Fixed output file names and sizes of the four charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub heatmap_file: String,
    pub relational_file: String,
    pub categorical_file: String,
    pub statistical_file: String,
    pub heatmap_size: ChartSize,
    pub relational_size: ChartSize,
    pub categorical_size: ChartSize,
    pub statistical_size: ChartSize,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            heatmap_file: "correlation_heatmap.png".to_string(),
            relational_file: "relational_plot.png".to_string(),
            categorical_file: "categorical_plot.png".to_string(),
            statistical_file: "statistical_plot.png".to_string(),
            heatmap_size: ChartSize::new(600, 400),
            relational_size: ChartSize::new(800, 500),
            categorical_size: ChartSize::new(1000, 500),
            statistical_size: ChartSize::new(800, 500),
        }
    }
}

/// Configuration for a single analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// CSV file to load.
    /// Default: "data.csv"
    pub input_path: PathBuf,

    /// Directory the chart images (and optional report) are written to.
    /// Default: "."
    pub output_dir: PathBuf,

    /// Column whose four moments are computed and reported.
    /// Default: "money"
    pub target_column: String,

    /// Number of rows shown in the head preview.
    /// Default: 5
    pub head_rows: usize,

    /// Whether to print the diagnostic summaries while preprocessing.
    /// Default: true
    pub print_diagnostics: bool,

    /// Whether to print the closing interpretation of the moments.
    /// Default: true
    pub print_interpretation: bool,

    /// Chart file names and pixel sizes.
    pub charts: ChartLayout,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            target_column: DEFAULT_TARGET_COLUMN.to_string(),
            head_rows: 5,
            print_diagnostics: true,
            print_interpretation: true,
            charts: ChartLayout::default(),
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Full path of a chart file inside the output directory.
    pub fn chart_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyInputPath);
        }

        if self.target_column.trim().is_empty() {
            return Err(ConfigValidationError::EmptyTargetColumn);
        }

        if self.head_rows == 0 {
            return Err(ConfigValidationError::InvalidHeadRows(self.head_rows));
        }

        let sizes = [
            ("heatmap", self.charts.heatmap_size),
            ("relational", self.charts.relational_size),
            ("categorical", self.charts.categorical_size),
            ("statistical", self.charts.statistical_size),
        ];
        for (chart, size) in sizes {
            if size.width < MIN_CHART_EDGE || size.height < MIN_CHART_EDGE {
                return Err(ConfigValidationError::ChartTooSmall {
                    chart: chart.to_string(),
                    width: size.width,
                    height: size.height,
                });
            }
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Input path must not be empty")]
    EmptyInputPath,

    #[error("Target column must not be empty")]
    EmptyTargetColumn,

    #[error("Invalid head rows: {0} (must be at least 1)")]
    InvalidHeadRows(usize),

    #[error("Chart '{chart}' is too small: {width}x{height} (minimum edge is 100px)")]
    ChartTooSmall {
        chart: String,
        width: u32,
        height: u32,
    },
}

impl From<ConfigValidationError> for crate::error::AnalysisError {
    fn from(err: ConfigValidationError) -> Self {
        crate::error::AnalysisError::InvalidConfig(err.to_string())
    }
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    input_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    target_column: Option<String>,
    head_rows: Option<usize>,
    print_diagnostics: Option<bool>,
    print_interpretation: Option<bool>,
    charts: Option<ChartLayout>,
}

impl AnalysisConfigBuilder {
    /// Set the CSV file to load.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the directory chart images are written to.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the column whose moments are reported.
    pub fn target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = Some(column.into());
        self
    }

    /// Set how many rows the head preview prints.
    pub fn head_rows(mut self, rows: usize) -> Self {
        self.head_rows = Some(rows);
        self
    }

    /// Enable or disable the diagnostic printout.
    pub fn print_diagnostics(mut self, print: bool) -> Self {
        self.print_diagnostics = Some(print);
        self
    }

    /// Enable or disable printing the interpretation sentence.
    pub fn print_interpretation(mut self, print: bool) -> Self {
        self.print_interpretation = Some(print);
        self
    }

    /// Override chart file names and sizes.
    pub fn charts(mut self, charts: ChartLayout) -> Self {
        self.charts = Some(charts);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let config = AnalysisConfig {
            input_path: self
                .input_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            target_column: self
                .target_column
                .unwrap_or_else(|| DEFAULT_TARGET_COLUMN.to_string()),
            head_rows: self.head_rows.unwrap_or(5),
            print_diagnostics: self.print_diagnostics.unwrap_or(true),
            print_interpretation: self.print_interpretation.unwrap_or(true),
            charts: self.charts.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}
