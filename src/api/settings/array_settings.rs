use derive_new::new;
use thiserror::Error;

/// Default number of rows in the generated grid.
pub const DEFAULT_ROWS: usize = 4;

/// Default number of columns in the generated grid.
pub const DEFAULT_COLS: usize = 3;

/// Default inclusive lower bound for random values.
pub const DEFAULT_LOW: i64 = 1;

/// Default inclusive upper bound for random values.
pub const DEFAULT_HIGH: i64 = 12;

/// Errors raised when [`ArraySettings`] describe a grid that can't be built.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum SettingsError {
    /// The grid would have no rows or no columns.
    #[error("Grid dimensions must be positive, got {rows} rows and {cols} columns")]
    ZeroDimension { rows: usize, cols: usize },

    /// The inclusive value range contains no integers.
    #[error("Lower bound {low} is greater than upper bound {high}")]
    EmptyRange { low: i64, high: i64 },
}

/// Controls the shape and contents of the grid made by [`crate::api::builder::make_array`].
///
/// # Remarks
///
/// Without a [`Self::seed`] the grid is the sequential demo grid `1..=rows*cols`
/// and [`Self::low`] / [`Self::high`] are ignored.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ArraySettings {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Seed for the random generator.
    /// The same seed always reproduces the same grid.
    pub seed: Option<u64>,

    /// Minimum random value (inclusive).
    pub low: i64,

    /// Maximum random value (inclusive).
    pub high: i64,
}

impl Default for ArraySettings {
    fn default() -> Self {
        ArraySettings {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}

impl ArraySettings {
    /// Checks that the settings describe a non-empty grid and a non-empty value range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SettingsError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }

        // Range only matters when values are drawn at random.
        if self.seed.is_some() && self.low > self.high {
            return Err(SettingsError::EmptyRange {
                low: self.low,
                high: self.high,
            });
        }

        Ok(())
    }
}

// Unit tests using rstest
#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_match_demo_grid() {
        let settings = ArraySettings::default();
        assert_eq!(settings, ArraySettings::new(4, 3, None, 1, 12));
        assert!(settings.validate().is_ok());
    }

    #[rstest(rows, cols,
        case(0, 3),
        case(4, 0),
        case(0, 0)
    )]
    fn zero_dimension_is_rejected(rows: usize, cols: usize) {
        let settings = ArraySettings::new(rows, cols, Some(1), 1, 12);
        assert_eq!(
            settings.validate(),
            Err(SettingsError::ZeroDimension { rows, cols })
        );
    }

    #[rstest(low, high, valid,
        case(1, 12, true),
        case(5, 5, true),     // Single value range
        case(-10, -1, true),
        case(13, 12, false),  // Inverted range
        case(i64::MAX, i64::MIN, false)
    )]
    fn random_range_is_checked(low: i64, high: i64, valid: bool) {
        let settings = ArraySettings::new(2, 2, Some(42), low, high);
        assert_eq!(settings.validate().is_ok(), valid);
    }

    #[test]
    fn range_is_ignored_without_seed() {
        let settings = ArraySettings::new(2, 2, None, 13, 12);
        assert!(settings.validate().is_ok());
    }
}
