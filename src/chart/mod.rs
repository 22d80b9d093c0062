//! Bar charts of label/value series.
//!
//! A [`BarChart`] is built from a [`Series`] plus a title and axis titles and
//! shown on one of the [`ChartTarget`]s: drawn into the terminal, plotted to an
//! SVG file with `plotters` and opened in the browser, or skipped.

pub mod browser;
pub mod terminal;

use clap::ValueEnum;

use crate::{error::Result, success, types::Series};

/// Where a chart is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ChartTarget {
    /// Draw bars in the terminal
    #[default]
    Terminal,
    /// Plot an SVG chart and open it in the default browser
    Browser,
    /// Do not render charts
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub series: Series,
}

impl BarChart {
    pub fn new(title: impl Into<String>, series: Series) -> Self {
        Self {
            title: title.into(),
            x_title: String::new(),
            y_title: String::new(),
            series,
        }
    }

    pub fn axes(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_title = x_title.into();
        self.y_title = y_title.into();
        self
    }

    pub fn bar_count(&self) -> usize {
        self.series.len()
    }

    /// Largest value of the series, `0.0` for an empty or all-negative series.
    pub fn max_value(&self) -> f64 {
        self.series.values().iter().copied().fold(0.0, f64::max)
    }
}

/// Shows `chart` on `target`. Charts without bars are never rendered.
///
/// # Errors
///
/// Only the browser target can fail: plotting, writing the SVG file or
/// launching the browser.
pub async fn show(chart: &BarChart, target: ChartTarget) -> Result<()> {
    if chart.bar_count() == 0 {
        return Ok(());
    }

    match target {
        ChartTarget::Terminal => {
            println!("\n{}", terminal::render(chart));
        }
        ChartTarget::Browser => {
            let path = browser::open(chart).await?;
            success!("Chart opened in your browser ({})", path.display());
        }
        ChartTarget::None => {}
    }
    Ok(())
}

/// Formats a bar value: whole numbers without decimals, others with one.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
