//! Statistical analysis of the cleaned dataset.
//!
//! - [`moments`]: mean, standard deviation, skewness and excess kurtosis
//! - [`correlation`]: Pearson correlation matrix over numeric columns

pub mod correlation;
pub mod moments;

pub use correlation::CorrelationMatrix;
pub use moments::{Moments, statistical_analysis};
