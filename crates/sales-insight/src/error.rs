//! Error types for the analysis pipeline.
//!
//! Every stage fails fast: errors propagate to the caller unchanged, with
//! optional context attached through [`ResultExt::context`].
//!
//! Errors serialize as `{ "code": ..., "message": ... }` so they can be
//! embedded in JSON output.

use serde::Serialize;
use serde::ser::SerializeStruct;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the analysis pipeline.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input CSV file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A numeric operation was requested on a non-numeric column.
    #[error("Column '{column}' has non-numeric type {dtype}")]
    NonNumericColumn { column: String, dtype: String },

    /// Chart rendering or PNG encoding failed.
    #[error("Failed to render chart '{chart}': {reason}")]
    ChartRendering { chart: String, reason: String },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AnalysisError>,
    },
}

static_assertions::assert_impl_all!(AnalysisError: Send, Sync);

impl AnalysisError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AnalysisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Build a rendering error from any plotters error.
    pub fn chart(chart: impl Into<String>, err: impl std::fmt::Display) -> Self {
        AnalysisError::ChartRendering {
            chart: chart.into(),
            reason: err.to_string(),
        }
    }

    /// Stable error code, preserved through context wrapping.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InputNotFound(_) => "INPUT_NOT_FOUND",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::NonNumericColumn { .. } => "NON_NUMERIC_COLUMN",
            Self::ChartRendering { .. } => "CHART_RENDERING_FAILED",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Strip context wrappers and return the underlying error.
    pub fn root(&self) -> &AnalysisError {
        match self {
            Self::WithContext { source, .. } => source.root(),
            other => other,
        }
    }
}

impl Serialize for AnalysisError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AnalysisError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AnalysisError::Polars(e).with_context(context))
    }
}

impl<T> ResultExt<T> for std::io::Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AnalysisError::Io(e).with_context(context))
    }
}
