use colored::Colorize;
use tabled::{builder::Builder, settings::Style};

use super::{BarChart, format_value};

/// Width in cells of the longest bar.
pub const MAX_BAR_WIDTH: usize = 40;

/// Character bars are drawn with.
pub const BAR_CELL: char = '█';

/// Number of cells for `value` when `max` fills `width` cells.
///
/// Positive values always get at least one cell so they stay visible next to
/// much larger ones.
pub fn bar_width(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let cells = (value / max * width as f64).round() as usize;
    cells.clamp(1, width)
}

/// Draws `chart` as a title line followed by a table of horizontal bars.
pub fn render(chart: &BarChart) -> String {
    let max = chart.max_value();

    let mut builder = Builder::default();
    builder.push_record([
        chart.x_title.clone(),
        String::new(),
        chart.y_title.clone(),
    ]);
    for (label, value) in chart.series.iter() {
        builder.push_record([
            label.to_string(),
            BAR_CELL
                .to_string()
                .repeat(bar_width(value, max, MAX_BAR_WIDTH)),
            format_value(value),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!("{}\n{}", chart.title.bold(), table)
}
