//! Annotated correlation heatmap.

use super::{
    ChartResultExt, FONT, TICK_SIZE, TITLE_SIZE, announce, category_label, category_span,
    ensure_not_empty, palette,
};
use crate::analysis::CorrelationMatrix;
use crate::config::AnalysisConfig;
use crate::error::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::PathBuf;

const CHART: &str = "heatmap";
const MISSING_CELL: RGBColor = RGBColor(220, 220, 220);

/// Render `correlation_heatmap.png` from `matrix` and return its path.
///
/// Cells are shaded on a sequential blue scale between the smallest and
/// largest finite coefficient and annotated to two decimals. Undefined
/// coefficients get a grey cell labelled `NaN`. The first column is drawn in
/// the top row.
pub fn correlation_heatmap(matrix: &CorrelationMatrix, config: &AnalysisConfig) -> Result<PathBuf> {
    let n = matrix.len();
    ensure_not_empty(CHART, n)?;

    let path = config.chart_path(&config.charts.heatmap_file);
    let (min, max) = matrix
        .values
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    let top = n as f64 - 1.0;

    {
        let root =
            BitMapBackend::new(&path, config.charts.heatmap_size.as_tuple()).into_drawing_area();
        root.fill(&WHITE).chart(CHART)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Correlation Heatmap of Numeric Columns", (FONT, TITLE_SIZE))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(110)
            .build_cartesian_2d(category_span(n), category_span(n))
            .chart(CHART)?;

        let x_label = |tick: &f64| category_label(&matrix.labels, *tick);
        let y_label = |tick: &f64| category_label(&matrix.labels, top - *tick);
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(n)
            .y_labels(n)
            .x_label_formatter(&x_label)
            .y_label_formatter(&y_label)
            .label_style((FONT, TICK_SIZE))
            .draw()
            .chart(CHART)?;

        for (row, values) in matrix.values.iter().enumerate() {
            let y = top - row as f64;
            for (col, value) in values.iter().enumerate() {
                let x = col as f64;
                let fill = if value.is_finite() {
                    palette::blues(*value, min, max)
                } else {
                    MISSING_CELL
                };
                let text_color = palette::contrast_text(&fill);
                let style = (FONT, TICK_SIZE)
                    .into_font()
                    .color(&text_color)
                    .pos(Pos::new(HPos::Center, VPos::Center));

                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                        fill.filled(),
                    )))
                    .chart(CHART)?;
                chart
                    .draw_series(std::iter::once(Text::new(
                        format!("{:.2}", value),
                        (x, y),
                        style,
                    )))
                    .chart(CHART)?;
            }
        }

        root.present().chart(CHART)?;
    }

    announce(&path);
    Ok(path)
}
