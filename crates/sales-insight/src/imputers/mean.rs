//! Column-mean imputation for numeric columns.

use crate::error::Result;
use crate::utils::{
    fill_numeric_nulls, is_numeric_dtype, missing_count, numeric_column_names, present_mean,
};
use polars::prelude::*;
use tracing::info;

/// Fills missing numeric values with the mean of the column's present values.
pub struct MeanImputer;

impl MeanImputer {
    /// Impute every numeric column of `df` in place.
    ///
    /// Means are taken from the present values at call time; nulls and NaN
    /// both count as missing. Columns without
    /// nulls are left exactly as they are, so a second call changes nothing.
    /// Non-numeric columns are never touched.
    pub fn impute_numeric_columns(
        df: &mut DataFrame,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        for col_name in numeric_column_names(df) {
            Self::apply_numeric_mean(df, &col_name, processing_steps)?;
        }
        Ok(())
    }

    /// Apply mean imputation to a single numeric column.
    ///
    /// A column with no present values gets NaN in every missing slot.
    pub fn apply_numeric_mean(
        df: &mut DataFrame,
        col_name: &str,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        let Ok(col) = df.column(col_name) else {
            return Ok(());
        };
        let series = col.as_materialized_series();
        if !is_numeric_dtype(series.dtype()) || missing_count(series)? == 0 {
            return Ok(());
        }

        let mean_val = present_mean(series)?;
        let filled = fill_numeric_nulls(series, mean_val)?;
        df.replace(col_name, filled)?;

        let step = format!("Filled '{}' with mean: {:.2}", col_name, mean_val);
        info!("{}", step);
        processing_steps.push(step);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_numeric_mean_basic() {
        let mut df = df![
            "values" => [Some(1.0), None, Some(3.0)],
        ]
        .unwrap();
        let mut steps = Vec::new();

        MeanImputer::apply_numeric_mean(&mut df, "values", &mut steps).unwrap();

        // Mean of [1, 3] = 2
        let values = df.column("values").unwrap();
        assert_eq!(values.null_count(), 0);
        assert_eq!(values.get(1).unwrap().try_extract::<f64>().unwrap(), 2.0);
        assert!(steps[0].contains("mean"));
    }

    #[test]
    fn test_apply_numeric_mean_preserves_original_values() {
        let mut df = df![
            "values" => [Some(10.0), None, Some(20.0)],
        ]
        .unwrap();
        let mut steps = Vec::new();

        MeanImputer::apply_numeric_mean(&mut df, "values", &mut steps).unwrap();

        let values = df.column("values").unwrap();
        assert_eq!(values.get(0).unwrap().try_extract::<f64>().unwrap(), 10.0);
        assert_eq!(values.get(2).unwrap().try_extract::<f64>().unwrap(), 20.0);
        assert_eq!(values.get(1).unwrap().try_extract::<f64>().unwrap(), 15.0);
    }

    #[test]
    fn test_nan_is_imputed_like_null() {
        let mut df = df![
            "money" => [Some(1.0), Some(f64::NAN), Some(3.0)],
        ]
        .unwrap();
        let mut steps = Vec::new();

        MeanImputer::apply_numeric_mean(&mut df, "money", &mut steps).unwrap();

        let money = df.column("money").unwrap();
        assert_eq!(money.get(1).unwrap().try_extract::<f64>().unwrap(), 2.0);
        assert_eq!(steps, vec!["Filled 'money' with mean: 2.00".to_string()]);
    }

    #[test]
    fn test_mean_ignores_nan_when_nulls_present() {
        let mut df = df![
            "money" => [Some(2.0), None, Some(f64::NAN), Some(4.0)],
        ]
        .unwrap();
        let mut steps = Vec::new();

        MeanImputer::apply_numeric_mean(&mut df, "money", &mut steps).unwrap();

        let money = df.column("money").unwrap();
        assert_eq!(money.get(1).unwrap().try_extract::<f64>().unwrap(), 3.0);
        assert_eq!(money.get(2).unwrap().try_extract::<f64>().unwrap(), 3.0);
    }

    #[test]
    fn test_integer_column_with_nulls_becomes_float() {
        let mut df = df![
            "hour_of_day" => [Some(9i64), None, Some(12)],
        ]
        .unwrap();
        let mut steps = Vec::new();

        MeanImputer::apply_numeric_mean(&mut df, "hour_of_day", &mut steps).unwrap();

        let hours = df.column("hour_of_day").unwrap();
        assert_eq!(hours.dtype(), &DataType::Float64);
        assert_eq!(hours.get(1).unwrap().try_extract::<f64>().unwrap(), 10.5);
    }

    #[test]
    fn test_all_nulls_column_becomes_nan() {
        let mut df = df![
            "values" => [Option::<f64>::None, None, None],
        ]
        .unwrap();
        let mut steps = Vec::new();

        MeanImputer::apply_numeric_mean(&mut df, "values", &mut steps).unwrap();

        let values = df.column("values").unwrap();
        assert_eq!(values.null_count(), 0);
        assert!(
            values
                .get(0)
                .unwrap()
                .try_extract::<f64>()
                .unwrap()
                .is_nan()
        );
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn test_no_nulls_is_untouched() {
        let original = df![
            "hour_of_day" => [10i64, 11, 12],
        ]
        .unwrap();
        let mut df = original.clone();
        let mut steps = Vec::new();

        MeanImputer::impute_numeric_columns(&mut df, &mut steps).unwrap();

        assert!(df.equals_missing(&original));
        assert_eq!(df.column("hour_of_day").unwrap().dtype(), &DataType::Int64);
        assert!(steps.is_empty());
    }

    #[test]
    fn test_impute_skips_string_columns() {
        let mut df = df![
            "coffee_name" => [Some("Latte"), None, Some("Mocha")],
            "money" => [Some(30.0), None, Some(40.0)],
        ]
        .unwrap();
        let mut steps = Vec::new();

        MeanImputer::impute_numeric_columns(&mut df, &mut steps).unwrap();

        assert_eq!(df.column("coffee_name").unwrap().null_count(), 1);
        assert_eq!(df.column("money").unwrap().null_count(), 0);
        assert_eq!(steps, vec!["Filled 'money' with mean: 35.00".to_string()]);
    }

    #[test]
    fn test_second_pass_is_identity() {
        let mut df = df![
            "hour_of_day" => [Some(8i64), None, Some(10)],
            "money" => [Some(1.0), None, Some(3.0)],
        ]
        .unwrap();
        let mut steps = Vec::new();

        MeanImputer::impute_numeric_columns(&mut df, &mut steps).unwrap();
        let after_first = df.clone();
        MeanImputer::impute_numeric_columns(&mut df, &mut steps).unwrap();

        assert!(df.equals_missing(&after_first));
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn test_nonexistent_column() {
        let mut df = df!["other" => [1.0, 2.0, 3.0]].unwrap();
        let mut steps = Vec::new();

        MeanImputer::apply_numeric_mean(&mut df, "values", &mut steps).unwrap();
        assert!(steps.is_empty());
    }
}
