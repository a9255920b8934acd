use core::fmt::{Display, Formatter};

/// Names one of the six sequences held by [`super::axis_stats::AxisStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatLabel {
    MeanByRow,
    MeanByCol,
    SumByRow,
    SumByCol,
    MedianByRow,
    MedianByCol,
}

impl StatLabel {
    /// All labels, in report order.
    pub const ALL: [StatLabel; 6] = [
        StatLabel::MeanByRow,
        StatLabel::MeanByCol,
        StatLabel::SumByRow,
        StatLabel::SumByCol,
        StatLabel::MedianByRow,
        StatLabel::MedianByCol,
    ];

    /// Stable snake case key, e.g. `mean_by_row`.
    pub fn key(self) -> &'static str {
        match self {
            StatLabel::MeanByRow => "mean_by_row",
            StatLabel::MeanByCol => "mean_by_col",
            StatLabel::SumByRow => "sum_by_row",
            StatLabel::SumByCol => "sum_by_col",
            StatLabel::MedianByRow => "median_by_row",
            StatLabel::MedianByCol => "median_by_col",
        }
    }

    /// Caption used by the text report, e.g. `Means by row:`.
    pub fn caption(self) -> &'static str {
        match self {
            StatLabel::MeanByRow => "Means by row:",
            StatLabel::MeanByCol => "Means by col:",
            StatLabel::SumByRow => "Sums by row:",
            StatLabel::SumByCol => "Sums by col:",
            StatLabel::MedianByRow => "Medians by row:",
            StatLabel::MedianByCol => "Medians by col:",
        }
    }

    /// True if the sequence has one value per row.
    pub fn is_by_row(self) -> bool {
        matches!(
            self,
            StatLabel::MeanByRow | StatLabel::SumByRow | StatLabel::MedianByRow
        )
    }
}

impl Display for StatLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = StatLabel::ALL.iter().map(|label| label.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), StatLabel::ALL.len());
    }

    #[test]
    fn half_of_labels_are_by_row() {
        let by_row = StatLabel::ALL.iter().filter(|label| label.is_by_row()).count();
        assert_eq!(by_row, 3);
        assert_eq!(StatLabel::SumByCol.to_string(), "sum_by_col");
    }
}
