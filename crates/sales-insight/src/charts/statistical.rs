//! Box plot of money per time-of-day bucket.

use super::{
    ChartResultExt, FONT, LABEL_SIZE, MONEY_COLUMN, TICK_SIZE, TIME_OF_DAY_COLUMN, TITLE_SIZE,
    announce, category_label, category_span, ensure_not_empty, padded_range, palette,
};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::utils::{category_values, numeric_values, quantile_sorted, sorted_finite};
use plotters::prelude::*;
use polars::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

const CHART: &str = "statistical";
const BOX_HALF_WIDTH: f64 = 0.4;
const CAP_HALF_WIDTH: f64 = 0.15;
const WHISKER_IQR: f64 = 1.5;

/// Five-number summary of one group plus the points beyond the whiskers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub label: String,
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value within 1.5 IQR below `q1`.
    pub whisker_low: f64,
    /// Largest value within 1.5 IQR above `q3`.
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Summarise `values`. Returns `None` when no finite values remain.
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Option<Self> {
        let sorted = sorted_finite(values);
        if sorted.is_empty() {
            return None;
        }

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR * iqr;
        let high_fence = q3 + WHISKER_IQR * iqr;

        let inside = sorted.iter().filter(|v| (low_fence..=high_fence).contains(*v));
        let whisker_low = inside.clone().next().copied().unwrap_or(q1);
        let whisker_high = inside.last().copied().unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            label: label.into(),
            count: sorted.len(),
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

/// Box statistics of `money` per `Time_of_Day`, in order of first appearance.
///
/// Rows with a missing bucket or amount are skipped.
pub fn group_distributions(df: &DataFrame) -> Result<Vec<BoxStats>> {
    let buckets = category_values(df, TIME_OF_DAY_COLUMN)?;
    let money = numeric_values(df, MONEY_COLUMN)?;

    let mut grouped: Vec<(String, Vec<f64>)> = Vec::new();
    for (bucket, spent) in buckets.into_iter().zip(money) {
        let (Some(bucket), Some(spent)) = (bucket, spent) else {
            continue;
        };
        match grouped.iter_mut().find(|(label, _)| *label == bucket) {
            Some((_, values)) => values.push(spent),
            None => grouped.push((bucket, vec![spent])),
        }
    }

    Ok(grouped
        .into_iter()
        .filter_map(|(label, values)| BoxStats::from_values(label, &values))
        .collect())
}

/// Render `statistical_plot.png` and return its path.
pub fn statistical_plot(df: &DataFrame, config: &AnalysisConfig) -> Result<PathBuf> {
    let groups = group_distributions(df)?;
    ensure_not_empty(CHART, groups.len())?;

    let path = config.chart_path(&config.charts.statistical_file);
    let colors = palette::set2(groups.len());
    let labels: Vec<String> = groups.iter().map(|g| g.label.clone()).collect();
    let (y_lo, y_hi) = padded_range(groups.iter().flat_map(|g| {
        [g.whisker_low, g.whisker_high]
            .into_iter()
            .chain(g.outliers.iter().copied())
    }));

    {
        let root = BitMapBackend::new(&path, config.charts.statistical_size.as_tuple())
            .into_drawing_area();
        root.fill(&WHITE).chart(CHART)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Statistical Plot: Money Distribution by Time of Day",
                (FONT, TITLE_SIZE),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(category_span(groups.len()), y_lo..y_hi)
            .chart(CHART)?;

        let label_for = |tick: &f64| category_label(&labels, *tick);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(groups.len())
            .x_label_formatter(&label_for)
            .x_desc("Time of Day")
            .y_desc("Money Spent")
            .axis_desc_style((FONT, LABEL_SIZE))
            .label_style((FONT, TICK_SIZE))
            .draw()
            .chart(CHART)?;

        let outline = ShapeStyle::from(&BLACK).stroke_width(1);
        for (i, (group, color)) in groups.iter().zip(&colors).enumerate() {
            let x = i as f64;
            let (left, right) = (x - BOX_HALF_WIDTH, x + BOX_HALF_WIDTH);
            let (cap_left, cap_right) = (x - CAP_HALF_WIDTH, x + CAP_HALF_WIDTH);

            chart
                .draw_series([
                    PathElement::new(vec![(x, group.whisker_low), (x, group.q1)], outline),
                    PathElement::new(vec![(x, group.q3), (x, group.whisker_high)], outline),
                    PathElement::new(
                        vec![(cap_left, group.whisker_low), (cap_right, group.whisker_low)],
                        outline,
                    ),
                    PathElement::new(
                        vec![(cap_left, group.whisker_high), (cap_right, group.whisker_high)],
                        outline,
                    ),
                ])
                .chart(CHART)?;

            chart
                .draw_series([
                    Rectangle::new([(left, group.q1), (right, group.q3)], color.filled()),
                    Rectangle::new([(left, group.q1), (right, group.q3)], outline),
                ])
                .chart(CHART)?;

            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(left, group.median), (right, group.median)],
                    outline.stroke_width(2),
                )))
                .chart(CHART)?;

            chart
                .draw_series(
                    group
                        .outliers
                        .iter()
                        .map(|&v| Circle::new((x, v), 3, outline)),
                )
                .chart(CHART)?;
        }

        root.present().chart(CHART)?;
    }

    announce(&path);
    Ok(path)
}
