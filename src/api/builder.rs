use crate::api::settings::array_settings::{ArraySettings, SettingsError};
use ndarray::Array2;
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Creates the grid described by `settings`.
///
/// With a seed the values are drawn uniformly from `low..=high`,
/// otherwise the grid holds `1..=rows*cols` in row-major order.
///
/// # Errors
///
/// Returns [`SettingsError`] if the settings fail [`ArraySettings::validate`].
pub fn make_array(settings: &ArraySettings) -> Result<Array2<i64>, SettingsError> {
    settings.validate()?;

    let array = match settings.seed {
        Some(seed) => {
            debug!(
                rows = settings.rows,
                cols = settings.cols,
                seed,
                low = settings.low,
                high = settings.high,
                "Building random grid"
            );
            make_random(
                settings.rows,
                settings.cols,
                seed,
                settings.low,
                settings.high,
            )
        }
        None => {
            debug!(
                rows = settings.rows,
                cols = settings.cols,
                "Building sequential grid"
            );
            make_sequential(settings.rows, settings.cols)
        }
    };

    Ok(array)
}

/// Creates a `rows`×`cols` grid holding `1..=rows*cols` in row-major order.
pub fn make_sequential(rows: usize, cols: usize) -> Array2<i64> {
    Array2::from_shape_fn((rows, cols), |(row, col)| (row * cols + col + 1) as i64)
}

/// Creates a `rows`×`cols` grid of integers drawn uniformly from `low..=high`.
///
/// Uses ChaCha8 so a given seed produces the same grid on every platform.
///
/// # Panics
///
/// If `low > high`. Use [`make_array`] for checked construction.
pub fn make_random(rows: usize, cols: usize, seed: u64, low: i64, high: i64) -> Array2<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let distribution = Uniform::new_inclusive(low, high);
    Array2::from_shape_simple_fn((rows, cols), || distribution.sample(&mut rng))
}
