//! The four statistical moments of a numeric column.
//!
//! Conventions follow the usual dataframe defaults so reported values agree
//! with other tools: sample standard deviation (ddof = 1), adjusted
//! Fisher-Pearson skewness (G1) and bias-corrected excess kurtosis (G2).

use crate::error::Result;
use crate::utils::numeric_values;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Central sums smaller than this are treated as floating point noise.
const FP_NOISE: f64 = 1e-14;

/// Mean, spread, asymmetry and tail weight of one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    pub mean: f64,
    pub std_dev: f64,
    pub skewness: f64,
    pub excess_kurtosis: f64,
}

impl Moments {
    /// Compute all four moments. NaN inputs are skipped.
    pub fn from_values(values: &[f64]) -> Self {
        let values: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        Self {
            mean: mean(&values),
            std_dev: sample_std(&values),
            skewness: skewness(&values),
            excess_kurtosis: excess_kurtosis(&values),
        }
    }

    /// Ordered `(mean, std_dev, skewness, excess_kurtosis)` view.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.mean, self.std_dev, self.skewness, self.excess_kurtosis)
    }
}

/// Compute the moments of `column`.
///
/// Fails with [`crate::AnalysisError::ColumnNotFound`] when the column is absent and
/// [`crate::AnalysisError::NonNumericColumn`] when it does not hold numbers. Nulls are
/// ignored; the preprocessor is expected to have imputed them already.
pub fn statistical_analysis(df: &DataFrame, column: &str) -> Result<Moments> {
    let values: Vec<f64> = numeric_values(df, column)?.into_iter().flatten().collect();
    let moments = Moments::from_values(&values);
    debug!(column, n = values.len(), ?moments, "Computed moments");
    Ok(moments)
}

/// Arithmetic mean, NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (ddof = 1), NaN below two values.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let (m2, _, _) = central_sums(values);
    (m2 / (n as f64 - 1.0)).sqrt()
}

/// Adjusted Fisher-Pearson skewness, NaN below three values, 0 for constants.
pub fn skewness(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 3 {
        return f64::NAN;
    }
    let (m2, m3, _) = central_sums(values);
    let m2 = zero_out_noise(m2);
    let m3 = zero_out_noise(m3);
    if m2 == 0.0 {
        return 0.0;
    }
    let n = n as f64;
    (n * (n - 1.0).sqrt() / (n - 2.0)) * (m3 / m2.powf(1.5))
}

/// Bias-corrected excess kurtosis, NaN below four values, 0 for constants.
pub fn excess_kurtosis(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 4 {
        return f64::NAN;
    }
    let (m2, _, m4) = central_sums(values);
    let n = n as f64;

    let adjustment = 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0));
    let numerator = zero_out_noise(n * (n + 1.0) * (n - 1.0) * m4);
    let denominator = zero_out_noise((n - 2.0) * (n - 3.0) * m2.powi(2));
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator - adjustment
}

/// Sums of squared, cubed and fourth-power deviations from the mean.
fn central_sums(values: &[f64]) -> (f64, f64, f64) {
    let mu = mean(values);
    values.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), v| {
        let d = v - mu;
        let d2 = d * d;
        (m2 + d2, m3 + d2 * d, m4 + d2 * d2)
    })
}

fn zero_out_noise(value: f64) -> f64 {
    if value.abs() < FP_NOISE { 0.0 } else { value }
}
