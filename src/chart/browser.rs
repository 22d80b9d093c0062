use std::{fmt::Display, path::PathBuf};

use chrono::Local;
use plotters::prelude::*;

use super::{BarChart, format_value};
use crate::{
    config,
    error::{DatifyError, Result},
};

const BAR_COLOR: RGBColor = RGBColor(29, 185, 84);
const MIN_WIDTH: u32 = 640;
const WIDTH_PER_BAR: u32 = 80;
const HEIGHT: u32 = 600;

/// Renders `chart` as an SVG file in the charts directory and opens it in the
/// default browser.
///
/// The file is named after the local time it was written at, e.g.
/// `chart-20240131-174502.svg`, and is kept after the browser was opened.
///
/// # Errors
///
/// - `DatifyError::Chart` - plotting failed or the browser cannot be launched
/// - `DatifyError::Io` - the charts directory or the file cannot be written
pub async fn open(chart: &BarChart) -> Result<PathBuf> {
    let svg = render(chart)?;

    let dir = config::charts_dir();
    async_fs::create_dir_all(&dir).await?;

    let path = dir.join(format!(
        "chart-{}.svg",
        Local::now().format("%Y%m%d-%H%M%S")
    ));
    async_fs::write(&path, svg).await?;

    webbrowser::open(&path.to_string_lossy()).map_err(|e| DatifyError::Chart(e.to_string()))?;
    Ok(path)
}

/// Draws `chart` as a vertical bar chart and returns the SVG document.
///
/// Bars are laid out on a segmented x axis, one segment per label, with the
/// y axis running from zero to a tenth above the largest value.
pub fn render(chart: &BarChart) -> Result<String> {
    let labels = chart.series.labels();
    let bars = chart.bar_count();
    let width = MIN_WIDTH.max(WIDTH_PER_BAR * bars as u32 + 200);
    let y_top = match chart.max_value() {
        max if max > 0.0 => max * 1.1,
        _ => 1.0,
    };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(140)
            .y_label_area_size(90)
            .build_cartesian_2d((0..bars).into_segmented(), 0f64..y_top)
            .map_err(plot_error)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_desc(chart.x_title.as_str())
            .y_desc(chart.y_title.as_str())
            .x_labels(bars)
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(idx) => labels.get(*idx).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_label_formatter(&|value| format_value(value.round()))
            .draw()
            .map_err(plot_error)?;

        ctx.draw_series(
            Histogram::vertical(&ctx)
                .style(BAR_COLOR.filled())
                .margin(8)
                .data(chart.series.values().iter().copied().enumerate()),
        )
        .map_err(plot_error)?;

        root.present().map_err(plot_error)?;
    }

    Ok(svg)
}

fn plot_error(err: impl Display) -> DatifyError {
    DatifyError::Chart(err.to_string())
}
