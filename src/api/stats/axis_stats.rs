//! Mean, sum and median reduced along each axis of a 2D array.
//!
//! "By row" collapses each row's columns into one value (one result per row).
//! "By col" collapses each column's rows into one value (one result per column).

use super::errors::StatsError;
use super::stat_label::StatLabel;
use crate::utilities::median::median_of;
use crate::utilities::stat_element::StatElement;
use ndarray::{Array1, ArrayBase, ArrayView2, Axis, Data, Dimension, Ix2};
use tracing::debug;

/// Axis along which a reduction produces one value per row.
const BY_ROW: Axis = Axis(1);

/// Axis along which a reduction produces one value per column.
const BY_COL: Axis = Axis(0);

/// The six statistics of a 2D array.
///
/// Sums are held in the widened [`StatElement::Sum`] type so they stay exact,
/// means and medians are `f64`. Every `*_by_row` sequence has one entry per row and every `*_by_col`
/// sequence has one entry per column.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisStats<A: StatElement> {
    pub mean_by_row: Array1<f64>,
    pub mean_by_col: Array1<f64>,
    pub sum_by_row: Array1<A::Sum>,
    pub sum_by_col: Array1<A::Sum>,
    pub median_by_row: Array1<f64>,
    pub median_by_col: Array1<f64>,
}

/// A borrowed view of one labelled sequence inside [`AxisStats`].
#[derive(Debug, Clone, Copy)]
pub enum StatSeries<'a, A: StatElement> {
    /// Values in the accumulator type of the input array (sums).
    Native(&'a Array1<A::Sum>),
    /// Floating point values (means and medians).
    Float(&'a Array1<f64>),
}

impl<A: StatElement> StatSeries<'_, A> {
    /// Number of values in the sequence.
    pub fn len(&self) -> usize {
        match self {
            StatSeries::Native(values) => values.len(),
            StatSeries::Float(values) => values.len(),
        }
    }

    /// True if the sequence holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the sequence out as `f64` values.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            StatSeries::Native(values) => values.iter().map(|&sum| A::sum_to_f64(sum)).collect(),
            StatSeries::Float(values) => values.to_vec(),
        }
    }
}

impl<A: StatElement> AxisStats<A> {
    /// Returns the sequence stored under `label`.
    pub fn series(&self, label: StatLabel) -> StatSeries<'_, A> {
        match label {
            StatLabel::MeanByRow => StatSeries::Float(&self.mean_by_row),
            StatLabel::MeanByCol => StatSeries::Float(&self.mean_by_col),
            StatLabel::SumByRow => StatSeries::Native(&self.sum_by_row),
            StatLabel::SumByCol => StatSeries::Native(&self.sum_by_col),
            StatLabel::MedianByRow => StatSeries::Float(&self.median_by_row),
            StatLabel::MedianByCol => StatSeries::Float(&self.median_by_col),
        }
    }

    /// Number of rows of the array the statistics were computed from.
    pub fn rows(&self) -> usize {
        self.sum_by_row.len()
    }

    /// Number of columns of the array the statistics were computed from.
    pub fn cols(&self) -> usize {
        self.sum_by_col.len()
    }
}

/// Computes mean, sum and median by row and by column.
///
/// Accepts an array of any dimensionality, including [`ndarray::IxDyn`].
///
/// # Errors
///
/// [`StatsError::InvalidInput`] if `array` is not exactly 2D. Nothing is
/// computed in that case.
pub fn compute_stats<A, S, D>(array: &ArrayBase<S, D>) -> Result<AxisStats<A>, StatsError>
where
    A: StatElement,
    S: Data<Elem = A>,
    D: Dimension,
{
    let ndim = array.ndim();
    if ndim != 2 {
        return Err(StatsError::InvalidInput { ndim });
    }

    let grid = array
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| StatsError::InvalidInput { ndim })?;

    debug!(rows = grid.nrows(), cols = grid.ncols(), "Computing axis statistics");
    Ok(compute_stats_2d(&grid))
}

fn compute_stats_2d<A: StatElement>(grid: &ArrayView2<'_, A>) -> AxisStats<A> {
    let sum_by_row = sum_along(grid, BY_ROW);
    let sum_by_col = sum_along(grid, BY_COL);

    AxisStats {
        mean_by_row: mean_from_sums::<A>(&sum_by_row, grid.ncols()),
        mean_by_col: mean_from_sums::<A>(&sum_by_col, grid.nrows()),
        median_by_row: median_along(grid, BY_ROW),
        median_by_col: median_along(grid, BY_COL),
        sum_by_row,
        sum_by_col,
    }
}

fn sum_along<A: StatElement>(grid: &ArrayView2<'_, A>, axis: Axis) -> Array1<A::Sum> {
    grid.fold_axis(axis, A::Sum::default(), |&acc, &value| acc + value.widen())
}

// Empty lanes divide by zero and yield NaN.
fn mean_from_sums<A: StatElement>(sums: &Array1<A::Sum>, lane_len: usize) -> Array1<f64> {
    let lane_len = lane_len as f64;
    sums.mapv(|sum| A::sum_to_f64(sum) / lane_len)
}

fn median_along<A: StatElement>(grid: &ArrayView2<'_, A>, axis: Axis) -> Array1<f64> {
    grid.map_axis(axis, |lane| median_of(lane.iter().copied()))
}
