//! Chart rendering.
//!
//! Every chart follows the same shape: validate and group the input columns
//! through a pure function, then draw with `plotters` onto a PNG bitmap in the
//! output directory. Column problems are reported before the image file is
//! created.
//!
//! - [`heatmap`]: annotated correlation matrix
//! - [`relational`]: money against hour of day, coloured by time of day
//! - [`categorical`]: mean money per coffee type
//! - [`statistical`]: money distribution per time of day

pub mod categorical;
pub mod heatmap;
pub mod palette;
pub mod relational;
pub mod statistical;

pub use categorical::{categorical_plot, group_means};
pub use heatmap::correlation_heatmap;
pub use relational::{relational_plot, scatter_groups};
pub use statistical::{BoxStats, group_distributions, statistical_plot};

use crate::error::{AnalysisError, Result};
use std::ops::Range;
use std::path::Path;
use tracing::info;

/// Hour the purchase happened, numeric.
pub const HOUR_COLUMN: &str = "hour_of_day";
/// Amount spent, numeric.
pub const MONEY_COLUMN: &str = "money";
/// Coarse time bucket (Morning, Afternoon, Night).
pub const TIME_OF_DAY_COLUMN: &str = "Time_of_Day";
/// Product name.
pub const COFFEE_COLUMN: &str = "coffee_name";

pub(crate) const FONT: &str = "sans-serif";
pub(crate) const TITLE_SIZE: u32 = 22;
pub(crate) const LABEL_SIZE: u32 = 16;
pub(crate) const TICK_SIZE: u32 = 13;

/// Maps drawing errors onto [`AnalysisError::ChartRendering`].
pub(crate) trait ChartResultExt<T> {
    fn chart(self, chart: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> ChartResultExt<T> for std::result::Result<T, E> {
    fn chart(self, chart: &str) -> Result<T> {
        self.map_err(|e| AnalysisError::chart(chart, e))
    }
}

/// Padded `(low, high)` axis bounds covering `values`.
///
/// Falls back to `0..1` without finite values and widens a zero-width range.
pub(crate) fn padded_range(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo == 0.0 {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

/// Axis span that centres `n` categories on the integers `0..n`.
pub(crate) fn category_span(n: usize) -> Range<f64> {
    -0.5..(n as f64 - 0.5)
}

/// Tick label on a category axis. Ticks between categories stay blank.
pub(crate) fn category_label(labels: &[String], tick: f64) -> String {
    let idx = tick.round();
    if (tick - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Fail before drawing when there is nothing to plot.
pub(crate) fn ensure_not_empty(chart: &str, groups: usize) -> Result<()> {
    if groups == 0 {
        return Err(AnalysisError::chart(
            chart,
            "no rows with all required values present",
        ));
    }
    Ok(())
}

/// Log the saved file in place of an on-screen display.
pub(crate) fn announce(path: &Path) {
    info!("Saved chart to {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        let (lo, hi) = padded_range([10.0, 20.0]);
        assert!((lo - 9.5).abs() < 1e-12);
        assert!((hi - 20.5).abs() < 1e-12);
    }

    #[test]
    fn test_padded_range_degenerate() {
        assert_eq!(padded_range([3.0, 3.0]), (2.0, 4.0));
        assert_eq!(padded_range([f64::NAN]), (0.0, 1.0));
        assert_eq!(padded_range(Vec::new()), (0.0, 1.0));
    }

    #[test]
    fn test_category_label() {
        let labels = vec!["Latte".to_string(), "Mocha".to_string()];
        assert_eq!(category_label(&labels, 0.0), "Latte");
        assert_eq!(category_label(&labels, 1.0000000001), "Mocha");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_span(2), -0.5..1.5);
    }

    #[test]
    fn test_ensure_not_empty() {
        let err = ensure_not_empty("relational", 0).unwrap_err();
        assert_eq!(err.error_code(), "CHART_RENDERING_FAILED");
        assert!(ensure_not_empty("relational", 2).is_ok());
    }
}
