//! Shared column helpers used by the preprocessor, analyzer and charts.

use crate::error::{AnalysisError, Result};
use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Names of all numeric columns, in frame order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

// =============================================================================
// Column Access
// =============================================================================

/// Look up a column, mapping a miss to [`AnalysisError::ColumnNotFound`].
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    df.column(name)
        .map(|col| col.as_materialized_series())
        .map_err(|_| AnalysisError::ColumnNotFound(name.to_string()))
}

/// Values of a numeric column as `f64`, nulls preserved.
///
/// Fails with [`AnalysisError::NonNumericColumn`] for any non-numeric dtype
/// instead of attempting a lossy cast.
pub fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = require_column(df, name)?;
    series_numeric_values(series)
}

/// Same as [`numeric_values`] for a series already in hand.
pub fn series_numeric_values(series: &Series) -> Result<Vec<Option<f64>>> {
    if !is_numeric_dtype(series.dtype()) {
        return Err(AnalysisError::NonNumericColumn {
            column: series.name().to_string(),
            dtype: series.dtype().to_string(),
        });
    }
    let casted = series.cast(&DataType::Float64)?;
    Ok(casted.f64()?.into_iter().collect())
}

/// Values of a column rendered as strings, nulls preserved.
pub fn category_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = require_column(df, name)?;
    let casted = series.cast(&DataType::String)?;
    Ok(casted
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

// =============================================================================
// Series Transformation Utilities
// =============================================================================

/// Number of missing slots in `series`.
///
/// A float NaN counts as missing alongside nulls, so a column read with
/// literal `NaN` entries is imputed like one with empty fields.
pub fn missing_count(series: &Series) -> Result<usize> {
    if !matches!(series.dtype(), DataType::Float32 | DataType::Float64) {
        return Ok(series.null_count());
    }
    let missing = series_numeric_values(series)?
        .into_iter()
        .filter(|v| v.is_none_or(f64::is_nan))
        .count();
    Ok(missing)
}

/// Mean of the present values of a numeric series. Nulls and NaN are
/// skipped; NaN when nothing is left.
pub fn present_mean(series: &Series) -> Result<f64> {
    let present: Vec<f64> = series_numeric_values(series)?
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect();
    if present.is_empty() {
        return Ok(f64::NAN);
    }
    Ok(present.iter().sum::<f64>() / present.len() as f64)
}

/// Fill null and NaN slots in a numeric Series with a specific value.
///
/// The result is always `Float64`, the same promotion an integer column with
/// missing entries gets when read by most dataframe libraries.
pub fn fill_numeric_nulls(series: &Series, fill_value: f64) -> Result<Series> {
    let values: Vec<Option<f64>> = series_numeric_values(series)?
        .into_iter()
        .map(|v| Some(v.filter(|x| !x.is_nan()).unwrap_or(fill_value)))
        .collect();
    Ok(Series::new(series.name().clone(), values))
}

// =============================================================================
// Numeric Helpers
// =============================================================================

/// Linear-interpolation quantile of an already sorted slice.
pub fn quantile_sorted(values: &[f64], quantile: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let pos = quantile.clamp(0.0, 1.0) * (values.len() as f64 - 1.0);
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return values[lower];
    }
    let weight = pos - lower as f64;
    values[lower] + (values[upper] - values[lower]) * weight
}

/// Sorted copy of the finite values.
pub fn sorted_finite(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}
