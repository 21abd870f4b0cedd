use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::plotting::styles::{ChartStyle, ChartTheme};
use crate::types::AggregationResult;

type PlotError = Box<dyn Error + Send + Sync>;

// Helper function to wrap errors
fn wrap_err<E>(e: E) -> PlotError
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    e.into()
}

/// Render an aggregation result to a PNG file off the async runtime.
///
/// Plot rendering is CPU-bound, so it runs on the blocking thread pool.
pub async fn render_chart_async(result: AggregationResult, path: PathBuf) -> Result<(), PlotError> {
    tokio::task::spawn_blocking(move || render_chart(&result, &path)).await??;
    Ok(())
}

/// Render an aggregation result as a multi-series line chart.
///
/// The bucket labels form the category axis and each series is drawn as one
/// named, palette-colored line. The drawing backend lives entirely inside
/// this call: it is created here and disposed on every exit path, so there is
/// exactly one live render target per invocation and none afterwards.
pub fn render_chart(result: &AggregationResult, path: &Path) -> Result<(), PlotError> {
    let theme = ChartTheme::default();
    let style = ChartStyle::default();

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&theme.background_color).map_err(wrap_err)?;

    let x_max = result.labels.len().max(1) as f64;
    // Headroom above the tallest bucket so the top of a line is never flush
    // with the plot border.
    let y_max = (result.max_count() as f64 * 1.2).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Event Activity",
            ("sans-serif", style.caption_font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .margin(style.margin)
        .set_all_label_area_size(style.label_area_size)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(wrap_err)?;

    chart
        .configure_mesh()
        .axis_style(&theme.axis_color)
        .light_line_style(&theme.grid_color)
        .label_style(
            ("sans-serif", style.label_font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .x_labels(result.labels.len().clamp(1, 12))
        .x_label_formatter(&|x| {
            result
                .labels
                .get(x.round() as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_desc("Total")
        .draw()
        .map_err(wrap_err)?;

    for (index, series) in result.series.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        let line_width = style.line_width;
        chart
            .draw_series(LineSeries::new(
                series
                    .counts
                    .iter()
                    .enumerate()
                    .map(|(bucket, count)| (bucket as f64, *count as f64)),
                color.stroke_width(line_width),
            ))
            .map_err(wrap_err)?
            .label(series.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });
    }

    if !result.series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&BLACK.mix(0.6))
            .border_style(&WHITE.mix(0.4))
            .label_font(
                ("sans-serif", style.label_font_size)
                    .into_font()
                    .color(&theme.text_color),
            )
            .draw()
            .map_err(wrap_err)?;
    }

    root.present().map_err(wrap_err)?;
    Ok(())
}
