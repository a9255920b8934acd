//! Numeric cell rendering in the style of array printers.
//!
//! Integer parts are right-aligned and fractional parts left-aligned, so
//! `[2.5, 5.]` becomes `[2.5, 5. ]` and `[6, 15]` becomes `[ 6, 15]`.

use ndarray::ArrayView2;

/// Maximum number of fractional digits printed for floating point cells.
pub const FLOAT_PRECISION: usize = 8;

/// Renders a single value as an unpadded cell.
pub trait RenderCell {
    fn render_cell(&self) -> String;
}

macro_rules! impl_render_cell_int {
    ($($ty:ty),*) => {
        $(
            impl RenderCell for $ty {
                fn render_cell(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_render_cell_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl RenderCell for f64 {
    fn render_cell(&self) -> String {
        format_float(*self)
    }
}

impl RenderCell for f32 {
    fn render_cell(&self) -> String {
        format_float(f64::from(*self))
    }
}

/// Magnitudes at or above this print in scientific notation.
pub const SCIENTIFIC_ABOVE: f64 = 1e16;

/// Non-zero magnitudes below this print in scientific notation.
pub const SCIENTIFIC_BELOW: f64 = 1e-4;

/// Formats a float with at most [`FLOAT_PRECISION`] fractional digits.
///
/// Integral values keep a trailing dot (`2.`), trailing zeros are trimmed
/// (`2.5`), and non-finite values print as `nan`, `inf` or `-inf`.
/// Magnitudes outside [`SCIENTIFIC_BELOW`]..[`SCIENTIFIC_ABOVE`] switch to
/// scientific notation with a signed two digit exponent (`1.e+17`, `1.5e-05`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_ABOVE || (magnitude > 0.0 && magnitude < SCIENTIFIC_BELOW) {
        return format_scientific(value);
    }

    let fixed = format!("{:.*}", FLOAT_PRECISION, value);
    fixed.trim_end_matches('0').to_string()
}

fn format_scientific(value: f64) -> String {
    let formatted = format!("{:.*e}", FLOAT_PRECISION, value);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    format!("{}e{:+03}", mantissa.trim_end_matches('0'), exponent)
}

/// Pads cells so that integer parts line up on the right and fractional
/// parts (from the `.` onward) line up on the left.
pub fn align_cells(cells: &[String]) -> Vec<String> {
    let parts: Vec<(&str, &str)> = cells.iter().map(|cell| split_at_dot(cell)).collect();
    let int_width = parts.iter().map(|(int, _)| int.len()).max().unwrap_or(0);
    let frac_width = parts.iter().map(|(_, frac)| frac.len()).max().unwrap_or(0);

    parts
        .iter()
        .map(|(int, frac)| format!("{:>int_width$}{:<frac_width$}", int, frac))
        .collect()
}

fn split_at_dot(cell: &str) -> (&str, &str) {
    match cell.find('.') {
        Some(index) => cell.split_at(index),
        None => (cell, ""),
    }
}

/// Renders values as a bracketed, comma separated, aligned list, e.g. `[ 6, 15]`.
pub fn format_sequence<'a, T, I>(values: I) -> String
where
    T: RenderCell + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let cells: Vec<String> = values.into_iter().map(RenderCell::render_cell).collect();
    format!("[{}]", align_cells(&cells).join(", "))
}

/// Renders a 2D grid with space separated cells and one row per line.
///
/// All cells share one alignment, so columns line up across rows:
///
/// ```text
/// [[ 1  2  3]
///  [10 11 12]]
/// ```
pub fn format_grid<T: RenderCell>(grid: &ArrayView2<'_, T>) -> String {
    let cells: Vec<String> = grid.iter().map(RenderCell::render_cell).collect();
    let aligned = align_cells(&cells);
    let cols = grid.ncols();

    let rows: Vec<String> = (0..grid.nrows())
        .map(|row| format!("[{}]", aligned[row * cols..(row + 1) * cols].join(" ")))
        .collect();

    format!("[{}]", rows.join("\n "))
}
