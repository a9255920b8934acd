use thiserror::Error;

/// Represents errors returned by [`super::axis_stats::compute_stats`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum StatsError {
    /// The input array does not have exactly two dimensions.
    #[error("Input array must be 2D, got {ndim} dimension(s)")]
    InvalidInput { ndim: usize },
}
