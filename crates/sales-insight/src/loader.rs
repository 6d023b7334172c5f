//! CSV loading.

use crate::error::{AnalysisError, Result, ResultExt};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Field values read as missing, in addition to empty fields.
pub const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Read a headed CSV file into a [`DataFrame`].
///
/// The schema is inferred from the whole file so a column whose first rows
/// happen to look like integers is still read as float when later rows say
/// otherwise. Any of [`NA_TOKENS`] counts as a missing value, so a numeric
/// column with `NA` gaps is still read as numeric. There is no schema validation and no fallback parsing: a missing
/// file or malformed content fails the run.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AnalysisError::InputNotFound(path.to_path_buf()));
    }

    info!("Loading dataset from: {}", path.display());
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(
            CsvParseOptions::default()
                .with_quote_char(Some(b'"'))
                .with_null_values(Some(NullValues::AllColumns(
                    NA_TOKENS.iter().map(|token| (*token).into()).collect(),
                ))),
        )
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .context(format!("Failed to open {}", path.display()))?
        .finish()
        .context(format!("Failed to parse {}", path.display()))?;

    debug!("Schema: {:?}", df.schema());
    info!("Dataset loaded successfully: {:?}", df.shape());
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::InputNotFound(ref p) if p == &path));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_load_mixed_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hour_of_day,coffee_name,money").unwrap();
        writeln!(file, "10,Latte,38.7").unwrap();
        writeln!(file, "12,\"Hot Chocolate\",").unwrap();
        writeln!(file, "15,Americano,28.9").unwrap();
        file.flush().unwrap();

        let df = load_dataset(file.path()).unwrap();
        assert_eq!(df.shape(), (3, 3));
        assert_eq!(df.column("hour_of_day").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("coffee_name").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("money").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("money").unwrap().null_count(), 1);
    }

    #[test]
    fn test_load_na_tokens_as_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "money,coffee_name").unwrap();
        writeln!(file, "1.0,Latte").unwrap();
        writeln!(file, "NA,N/A").unwrap();
        writeln!(file, "3.0,Mocha").unwrap();
        writeln!(file, "NaN,null").unwrap();
        file.flush().unwrap();

        let df = load_dataset(file.path()).unwrap();
        let money = df.column("money").unwrap();
        assert_eq!(money.dtype(), &DataType::Float64);
        assert_eq!(money.null_count(), 2);
        assert_eq!(df.column("coffee_name").unwrap().null_count(), 2);
    }
}
