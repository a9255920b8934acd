//! ASCII table rendering of axis statistics using the [`tabled`] crate.

use crate::api::stats::axis_stats::AxisStats;
use crate::utilities::format::cells::RenderCell;
use crate::utilities::stat_element::StatElement;
use derive_new::new;
use tabled::{Table, Tabled};

/// Statistics of a single row or column.
#[derive(Debug, Clone, Tabled, new)]
pub struct AxisEntry {
    /// Zero based row or column index
    #[tabled(rename = "Index")]
    pub index: usize,
    #[tabled(rename = "Mean")]
    pub mean: String,
    #[tabled(rename = "Sum")]
    pub sum: String,
    #[tabled(rename = "Median")]
    pub median: String,
}

/// Builds one [`AxisEntry`] per row.
pub fn row_entries<A>(stats: &AxisStats<A>) -> Vec<AxisEntry>
where
    A: StatElement,
    A::Sum: RenderCell,
{
    (0..stats.rows())
        .map(|row| {
            AxisEntry::new(
                row,
                stats.mean_by_row[row].render_cell(),
                stats.sum_by_row[row].render_cell(),
                stats.median_by_row[row].render_cell(),
            )
        })
        .collect()
}

/// Builds one [`AxisEntry`] per column.
pub fn col_entries<A>(stats: &AxisStats<A>) -> Vec<AxisEntry>
where
    A: StatElement,
    A::Sum: RenderCell,
{
    (0..stats.cols())
        .map(|col| {
            AxisEntry::new(
                col,
                stats.mean_by_col[col].render_cell(),
                stats.sum_by_col[col].render_cell(),
                stats.median_by_col[col].render_cell(),
            )
        })
        .collect()
}

/// Formats axis entries as an ASCII table with a title underline.
pub fn format_axis_table(entries: &[AxisEntry], title: &str) -> String {
    if entries.is_empty() {
        return format!("{}\n{}\nNo data", title, "=".repeat(title.len()));
    }

    let table = Table::new(entries).to_string();
    format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
}

/// Renders the statistics as a "By Row" table followed by a "By Column" table.
pub fn format_tables<A>(stats: &AxisStats<A>) -> String
where
    A: StatElement,
    A::Sum: RenderCell,
{
    format!(
        "{}\n\n{}",
        format_axis_table(&row_entries(stats), "By Row"),
        format_axis_table(&col_entries(stats), "By Column")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::builder::make_sequential;
    use crate::api::stats::axis_stats::compute_stats;

    #[test]
    fn entries_follow_axes() {
        let stats = compute_stats(&make_sequential(2, 3)).unwrap();

        let rows = row_entries(&stats);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].sum, "15");
        assert_eq!(rows[1].mean, "5.");

        let cols = col_entries(&stats);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].median, "2.5");
    }

    #[test]
    fn tables_contain_headers_and_values() {
        let stats = compute_stats(&make_sequential(2, 3)).unwrap();
        let tables = format_tables(&stats);

        assert!(tables.starts_with("By Row\n======"));
        assert!(tables.contains("By Column\n========="));
        for header in ["Index", "Mean", "Sum", "Median"] {
            assert!(tables.contains(header));
        }
        assert!(tables.contains("15"));
        assert!(tables.contains("4.5"));
    }

    #[test]
    fn empty_axis_has_placeholder() {
        assert_eq!(format_axis_table(&[], "By Row"), "By Row\n======\nNo data");
    }
}
