//! Scatter of money against hour of day, one colour per time-of-day bucket.

use super::{
    ChartResultExt, FONT, HOUR_COLUMN, LABEL_SIZE, MONEY_COLUMN, TICK_SIZE, TIME_OF_DAY_COLUMN,
    TITLE_SIZE, announce, ensure_not_empty, padded_range, palette,
};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::utils::{category_values, numeric_values};
use plotters::prelude::*;
use polars::prelude::*;
use std::path::PathBuf;

const CHART: &str = "relational";

/// Points sharing one hue value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGroup {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Split `(hour_of_day, money)` pairs by `Time_of_Day`.
///
/// Groups come out in order of first appearance. Rows missing any of the
/// three values are skipped.
pub fn scatter_groups(df: &DataFrame) -> Result<Vec<ScatterGroup>> {
    let hours = numeric_values(df, HOUR_COLUMN)?;
    let money = numeric_values(df, MONEY_COLUMN)?;
    let buckets = category_values(df, TIME_OF_DAY_COLUMN)?;

    let mut groups: Vec<ScatterGroup> = Vec::new();
    for ((hour, spent), bucket) in hours.into_iter().zip(money).zip(buckets) {
        let (Some(x), Some(y), Some(label)) = (hour, spent, bucket) else {
            continue;
        };
        if x.is_nan() || y.is_nan() {
            continue;
        }
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.points.push((x, y)),
            None => groups.push(ScatterGroup {
                label,
                points: vec![(x, y)],
            }),
        }
    }
    Ok(groups)
}

/// Render `relational_plot.png` and return its path.
pub fn relational_plot(df: &DataFrame, config: &AnalysisConfig) -> Result<PathBuf> {
    let groups = scatter_groups(df)?;
    ensure_not_empty(CHART, groups.len())?;

    let path = config.chart_path(&config.charts.relational_file);
    let colors = palette::coolwarm(groups.len());
    let (x_lo, x_hi) = padded_range(groups.iter().flat_map(|g| g.points.iter().map(|p| p.0)));
    let (y_lo, y_hi) = padded_range(groups.iter().flat_map(|g| g.points.iter().map(|p| p.1)));

    {
        let root =
            BitMapBackend::new(&path, config.charts.relational_size.as_tuple()).into_drawing_area();
        root.fill(&WHITE).chart(CHART)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Relational Plot: Money vs Hour of Day", (FONT, TITLE_SIZE))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
            .chart(CHART)?;

        chart
            .configure_mesh()
            .x_desc("Hour of Day")
            .y_desc("Money Spent")
            .axis_desc_style((FONT, LABEL_SIZE))
            .label_style((FONT, TICK_SIZE))
            .draw()
            .chart(CHART)?;

        // Marker-less entry acting as the legend title.
        chart
            .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())
            .chart(CHART)?
            .label("Time of Day");

        for (group, color) in groups.iter().zip(colors) {
            chart
                .draw_series(
                    group
                        .points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 5, color.filled())),
                )
                .chart(CHART)?
                .label(group.label.as_str())
                .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font((FONT, TICK_SIZE))
            .draw()
            .chart(CHART)?;

        root.present().chart(CHART)?;
    }

    announce(&path);
    Ok(path)
}
