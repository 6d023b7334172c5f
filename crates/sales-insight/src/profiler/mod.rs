//! Diagnostic summaries of a dataset.
//!
//! A [`DatasetSummary`] captures what is printed before cleaning: a preview
//! of the first rows, per-column info, descriptive statistics of numeric
//! columns and per-column null counts. Each section implements `Display`.

mod describe;

pub use describe::{DescribeRow, DescribeTable};

use crate::error::Result;
use crate::utils::missing_count;
use polars::prelude::*;
use serde::Serialize;
use std::fmt;

/// Name, non-null count and dtype of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub non_null: usize,
    pub dtype: String,
}

/// Column listing in the style of a dataframe `info()` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetInfo {
    pub rows: usize,
    pub columns: Vec<ColumnInfo>,
}

/// Missing-value count per column, in frame order. Float NaN counts as
/// missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NullCounts(pub Vec<(String, usize)>);

impl NullCounts {
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, n)| n).sum()
    }

    pub fn get(&self, column: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, n)| *n)
    }
}

/// Everything printed about a dataset before it is cleaned.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub head_rows: usize,
    pub head: DataFrame,
    pub info: DatasetInfo,
    pub describe: DescribeTable,
    pub null_counts: NullCounts,
}

impl DatasetSummary {
    /// Profile `df`, keeping `head_rows` rows for the preview.
    pub fn from_frame(df: &DataFrame, head_rows: usize) -> Result<Self> {
        let mut columns = Vec::with_capacity(df.width());
        let mut null_counts = Vec::with_capacity(df.width());
        for col in df.get_columns() {
            let missing = missing_count(col.as_materialized_series())?;
            columns.push(ColumnInfo {
                name: col.name().to_string(),
                non_null: col.len() - missing,
                dtype: col.dtype().to_string(),
            });
            null_counts.push((col.name().to_string(), missing));
        }
        let null_counts = NullCounts(null_counts);

        Ok(Self {
            head_rows,
            head: df.head(Some(head_rows)),
            info: DatasetInfo {
                rows: df.height(),
                columns,
            },
            describe: DescribeTable::from_frame(df)?,
            null_counts,
        })
    }

    /// Print all four sections to stdout.
    pub fn print(&self) -> Result<()> {
        println!("----- FIRST {} ROWS OF DATA -----", self.head_rows);
        println!("{}", self.head);

        println!("\n----- DATASET INFORMATION -----");
        println!("{}", self.info);

        println!("\n----- DESCRIPTIVE STATISTICS -----");
        println!("{}", self.describe.to_frame()?);

        println!("\n----- CHECKING MISSING VALUES -----");
        println!("{}", self.null_counts);
        Ok(())
    }
}

impl fmt::Display for DatasetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .columns
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0)
            .max("Column".len());

        writeln!(f, "{} entries", self.rows)?;
        writeln!(f, "Data columns (total {} columns):", self.columns.len())?;
        writeln!(
            f,
            " {:>3}  {:<name_width$}  {:<14}  Dtype",
            "#", "Column", "Non-Null Count"
        )?;
        writeln!(
            f,
            " {:>3}  {:<name_width$}  {:<14}  -----",
            "---",
            "-".repeat(name_width),
            "-".repeat(14)
        )?;
        for (idx, col) in self.columns.iter().enumerate() {
            writeln!(
                f,
                " {:>3}  {:<name_width$}  {:<14}  {}",
                idx,
                col.name,
                format!("{} non-null", col.non_null),
                col.dtype
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for NullCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.0.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, count) in &self.0 {
            writeln!(f, "{:<width$}  {}", name, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_frame() -> DataFrame {
        df![
            "hour_of_day" => [Some(10i64), Some(12), None, Some(16)],
            "coffee_name" => [Some("Latte"), None, Some("Americano"), Some("Latte")],
            "money" => [Some(38.7), Some(28.9), Some(33.8), None],
        ]
        .unwrap()
    }

    #[test]
    fn test_summary_sections() {
        let df = sample_frame();
        let summary = DatasetSummary::from_frame(&df, 2).unwrap();

        assert_eq!(summary.head.height(), 2);
        assert_eq!(summary.info.rows, 4);
        assert_eq!(
            summary.info.columns[0],
            ColumnInfo {
                name: "hour_of_day".to_string(),
                non_null: 3,
                dtype: "i64".to_string(),
            }
        );
        assert_eq!(summary.null_counts.get("coffee_name"), Some(1));
        assert_eq!(summary.null_counts.total(), 3);
        assert_eq!(summary.describe.rows.len(), 2);
    }

    #[test]
    fn test_nan_counted_as_missing() {
        let df = df!["money" => [1.0, f64::NAN, 3.0]].unwrap();
        let summary = DatasetSummary::from_frame(&df, 5).unwrap();

        assert_eq!(summary.null_counts.get("money"), Some(1));
        assert_eq!(summary.info.columns[0].non_null, 2);
    }

    #[test]
    fn test_head_larger_than_frame() {
        let df = sample_frame();
        let summary = DatasetSummary::from_frame(&df, 10).unwrap();
        assert_eq!(summary.head.height(), 4);
    }

    #[test]
    fn test_info_display() {
        let info = DatasetInfo {
            rows: 2,
            columns: vec![ColumnInfo {
                name: "money".to_string(),
                non_null: 2,
                dtype: "f64".to_string(),
            }],
        };
        let text = info.to_string();
        assert!(text.starts_with("2 entries\nData columns (total 1 columns):"));
        assert!(text.contains("money"));
        assert!(text.contains("2 non-null"));
        assert!(text.contains("f64"));
    }

    #[test]
    fn test_null_counts_display() {
        let counts = NullCounts(vec![("money".to_string(), 0), ("Time_of_Day".to_string(), 2)]);
        assert_eq!(counts.to_string(), "money        0\nTime_of_Day  2\n");
    }
}
