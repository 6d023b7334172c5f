//! Bar chart of average spend per coffee type.

use super::{
    COFFEE_COLUMN, ChartResultExt, FONT, LABEL_SIZE, MONEY_COLUMN, TICK_SIZE, TITLE_SIZE,
    announce, category_label, category_span, ensure_not_empty, padded_range, palette,
};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::utils::{category_values, numeric_values};
use plotters::prelude::*;
use polars::prelude::*;
use std::path::PathBuf;

const CHART: &str = "categorical";
const BAR_HALF_WIDTH: f64 = 0.4;

/// Mean of one category's values.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub label: String,
    pub mean: f64,
    pub count: usize,
}

/// Mean `money` per `coffee_name`, in order of first appearance.
pub fn group_means(df: &DataFrame) -> Result<Vec<GroupMean>> {
    let names = category_values(df, COFFEE_COLUMN)?;
    let money = numeric_values(df, MONEY_COLUMN)?;

    let mut sums: Vec<(String, f64, usize)> = Vec::new();
    for (name, spent) in names.into_iter().zip(money) {
        let (Some(name), Some(spent)) = (name, spent) else {
            continue;
        };
        if spent.is_nan() {
            continue;
        }
        match sums.iter_mut().find(|(label, _, _)| *label == name) {
            Some((_, sum, count)) => {
                *sum += spent;
                *count += 1;
            }
            None => sums.push((name, spent, 1)),
        }
    }

    Ok(sums
        .into_iter()
        .map(|(label, sum, count)| GroupMean {
            label,
            mean: sum / count as f64,
            count,
        })
        .collect())
}

/// Render `categorical_plot.png` and return its path.
///
/// Category labels are drawn vertically so long coffee names do not overlap.
pub fn categorical_plot(df: &DataFrame, config: &AnalysisConfig) -> Result<PathBuf> {
    let groups = group_means(df)?;
    ensure_not_empty(CHART, groups.len())?;

    let path = config.chart_path(&config.charts.categorical_file);
    let colors = palette::viridis(groups.len());
    let (_, y_hi) = padded_range(groups.iter().map(|g| g.mean).chain([0.0]));
    let labels: Vec<String> = groups.iter().map(|g| g.label.clone()).collect();

    {
        let root = BitMapBackend::new(&path, config.charts.categorical_size.as_tuple())
            .into_drawing_area();
        root.fill(&WHITE).chart(CHART)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Categorical Plot: Average Spending by Coffee Type",
                (FONT, TITLE_SIZE),
            )
            .margin(15)
            .x_label_area_size(140)
            .y_label_area_size(60)
            .build_cartesian_2d(category_span(groups.len()), 0.0..y_hi)
            .chart(CHART)?;

        let label_for = |tick: &f64| category_label(&labels, *tick);
        // plotters only rotates text in quarter turns, so names stand vertical
        // instead of at 45 degrees.
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(groups.len())
            .x_label_formatter(&label_for)
            .x_label_style((FONT, TICK_SIZE).into_font().transform(FontTransform::Rotate90))
            .x_desc("Coffee Name")
            .y_desc("Average Money Spent")
            .axis_desc_style((FONT, LABEL_SIZE))
            .y_label_style((FONT, TICK_SIZE))
            .draw()
            .chart(CHART)?;

        chart
            .draw_series(groups.iter().zip(&colors).enumerate().map(|(i, (group, color))| {
                let x = i as f64;
                Rectangle::new(
                    [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, group.mean)],
                    color.filled(),
                )
            }))
            .chart(CHART)?;

        root.present().chart(CHART)?;
    }

    announce(&path);
    Ok(path)
}
