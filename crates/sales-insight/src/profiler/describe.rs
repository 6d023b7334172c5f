//! Descriptive statistics for numeric columns.

use crate::analysis::moments::{mean, sample_std};
use crate::error::Result;
use crate::utils::{numeric_column_names, numeric_values, quantile_sorted, sorted_finite};
use polars::prelude::*;
use serde::Serialize;

/// Row labels of the describe table, top to bottom.
pub const STATISTIC_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Summary statistics of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescribeRow {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl DescribeRow {
    /// Statistics over the present, non-NaN values.
    pub fn from_values(column: &str, values: &[Option<f64>]) -> Self {
        let present: Vec<f64> = values.iter().flatten().copied().filter(|v| !v.is_nan()).collect();
        let sorted = sorted_finite(&present);
        Self {
            column: column.to_string(),
            count: present.len(),
            mean: mean(&present),
            std: sample_std(&present),
            min: sorted.first().copied().unwrap_or(f64::NAN),
            q25: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted.last().copied().unwrap_or(f64::NAN),
        }
    }

    /// Values in [`STATISTIC_LABELS`] order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

/// Describe output for every numeric column of a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescribeTable {
    pub rows: Vec<DescribeRow>,
}

impl DescribeTable {
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let mut rows = Vec::new();
        for name in numeric_column_names(df) {
            let values = numeric_values(df, &name)?;
            rows.push(DescribeRow::from_values(&name, &values));
        }
        Ok(Self { rows })
    }

    pub fn get(&self, column: &str) -> Option<&DescribeRow> {
        self.rows.iter().find(|row| row.column == column)
    }

    /// Lay the table out as a frame: a `statistic` label column followed by
    /// one column per numeric input column.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let mut columns = Vec::with_capacity(self.rows.len() + 1);
        columns.push(Column::new("statistic".into(), STATISTIC_LABELS.to_vec()));
        for row in &self.rows {
            columns.push(Column::new(row.column.as_str().into(), row.values().to_vec()));
        }
        Ok(DataFrame::new(columns)?)
    }
}
