use super::report_format::ReportFormat;
use crate::api::stats::axis_stats::{AxisStats, StatSeries};
use crate::api::stats::stat_label::StatLabel;
use crate::utilities::format::cells::{format_grid, format_sequence, RenderCell};
use crate::utilities::stat_element::StatElement;
use ndarray::ArrayView2;
use std::io::{self, Write};

/// Width the statistic captions are padded to, so the lists line up.
const CAPTION_WIDTH: usize = 16;

/// Renders the input grid with its shape, followed by a blank line.
pub fn format_grid_header<T: RenderCell>(array: &ArrayView2<'_, T>) -> String {
    format!(
        "Input array (shape ({}, {})):\n{}\n",
        array.nrows(),
        array.ncols(),
        format_grid(array)
    )
}

/// Renders a single labelled statistic, e.g. `Sums by row:     [ 6, 15]`.
pub fn format_series_line<A>(label: StatLabel, series: StatSeries<'_, A>) -> String
where
    A: StatElement,
    A::Sum: RenderCell,
{
    let values = match series {
        StatSeries::Native(values) => format_sequence(values.iter()),
        StatSeries::Float(values) => format_sequence(values.iter()),
    };

    format!("{:<width$} {}", label.caption(), values, width = CAPTION_WIDTH)
}

/// Renders the plain text report: the grid and its shape, then the six
/// statistics as bracketed, comma separated lists.
pub fn format_report<T, A>(array: &ArrayView2<'_, T>, stats: &AxisStats<A>) -> String
where
    T: RenderCell,
    A: StatElement,
    A::Sum: RenderCell,
{
    let mut output = format_grid_header(array);
    for label in StatLabel::ALL {
        output.push('\n');
        output.push_str(&format_series_line(label, stats.series(label)));
    }

    output
}

/// Renders the report in the requested format.
pub fn render_report<T, A>(
    array: &ArrayView2<'_, T>,
    stats: &AxisStats<A>,
    format: ReportFormat,
) -> String
where
    T: RenderCell,
    A: StatElement,
    A::Sum: RenderCell,
{
    match format {
        ReportFormat::Text => format_report(array, stats),
        #[cfg(feature = "tables")]
        ReportFormat::Table => format!(
            "{}\n{}",
            format_grid_header(array),
            super::table_report::format_tables(stats)
        ),
    }
}

/// Writes the report to standard output.
pub fn print_report<T, A>(
    array: &ArrayView2<'_, T>,
    stats: &AxisStats<A>,
    format: ReportFormat,
) -> io::Result<()>
where
    T: RenderCell,
    A: StatElement,
    A::Sum: RenderCell,
{
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render_report(array, stats, format))?;
    stdout.flush()
}
