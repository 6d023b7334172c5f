//! Imputation of missing values.
//!
//! Only numeric columns are imputed, with the column mean. Categorical
//! columns keep their missing entries.

mod mean;

pub use mean::MeanImputer;
