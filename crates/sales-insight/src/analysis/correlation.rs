//! Pairwise Pearson correlation over the numeric columns of a frame.

use crate::error::Result;
use crate::utils::{numeric_column_names, numeric_values};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Square correlation matrix with its column labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Pearson coefficients between every pair of numeric columns.
    ///
    /// Each pair uses only rows where both values are present. Pairs with
    /// fewer than two shared rows or zero variance are NaN.
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let labels = numeric_column_names(df);
        let mut columns = Vec::with_capacity(labels.len());
        for name in &labels {
            columns.push(numeric_values(df, name)?);
        }

        let size = labels.len();
        let mut values = vec![vec![f64::NAN; size]; size];
        for i in 0..size {
            for j in i..size {
                let r = pearson_pairwise(&columns[i], &columns[j]);
                let r = if i == j && r.is_finite() { 1.0 } else { r };
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(Self { labels, values })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Coefficient between two labelled columns.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        Some(self.values[i][j])
    }
}

fn pearson_pairwise(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let (x, y): (Vec<f64>, Vec<f64>) = a
        .iter()
        .zip(b.iter())
        .filter_map(|pair| match pair {
            (Some(x), Some(y)) if !x.is_nan() && !y.is_nan() => Some((*x, *y)),
            _ => None,
        })
        .unzip();
    pearson(&x, &y)
}

/// Pearson correlation coefficient of two equally long samples.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }
    let mean_x = x[..n].iter().sum::<f64>() / n as f64;
    let mean_y = y[..n].iter().sum::<f64>() / n as f64;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (xi, yi) in x[..n].iter().zip(&y[..n]) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    (sxy / denom).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_linear_relation() {
        let df = df![
            "hour_of_day" => [8i64, 9, 10, 11],
            "money" => [10.0, 12.0, 14.0, 16.0],
            "coffee_name" => ["Latte", "Latte", "Mocha", "Cortado"],
        ]
        .unwrap();

        let matrix = CorrelationMatrix::from_frame(&df).unwrap();
        assert_eq!(matrix.labels, vec!["hour_of_day", "money"]);
        assert_eq!(matrix.get("hour_of_day", "hour_of_day"), Some(1.0));
        let r = matrix.get("hour_of_day", "money").unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        assert_eq!(matrix.get("money", "hour_of_day"), Some(r));
    }

    #[test]
    fn test_negative_relation() {
        let r = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]);
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_column_is_nan() {
        let df = df![
            "a" => [1.0, 1.0, 1.0],
            "b" => [1.0, 2.0, 3.0],
        ]
        .unwrap();
        let matrix = CorrelationMatrix::from_frame(&df).unwrap();
        assert!(matrix.get("a", "b").unwrap().is_nan());
        assert!(matrix.get("a", "a").unwrap().is_nan());
    }

    #[test]
    fn test_pairwise_complete_observations() {
        let df = df![
            "a" => [Some(1.0), Some(2.0), None, Some(4.0)],
            "b" => [Some(2.0), Some(4.0), Some(100.0), Some(8.0)],
        ]
        .unwrap();
        let matrix = CorrelationMatrix::from_frame(&df).unwrap();
        let r = matrix.get("a", "b").unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_numeric_columns() {
        let df = df!["coffee_name" => ["Latte"]].unwrap();
        let matrix = CorrelationMatrix::from_frame(&df).unwrap();
        assert!(matrix.is_empty());
    }
}
