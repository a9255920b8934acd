use core::fmt::Debug;
use core::ops::Add;

/// A numeric array element which can be summed exactly and averaged as `f64`.
///
/// Sums are accumulated in [`Self::Sum`], which is `i128` for signed integers,
/// `u128` for unsigned integers and `f64` for floats. Means and medians go
/// through [`Self::to_f64`].
pub trait StatElement: Copy {
    /// Accumulator type used for sums along an axis.
    type Sum: Copy + Default + Add<Output = Self::Sum> + Debug + PartialEq;

    /// Converts the value to `f64` for mean and median calculation.
    fn to_f64(self) -> f64;

    /// Converts the value into the accumulator type.
    fn widen(self) -> Self::Sum;

    /// Converts an accumulated sum to `f64` for mean calculation.
    fn sum_to_f64(sum: Self::Sum) -> f64;
}

macro_rules! impl_stat_element {
    ($sum:ty => $($ty:ty),*) => {
        $(
            impl StatElement for $ty {
                type Sum = $sum;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn widen(self) -> $sum {
                    self as $sum
                }

                #[inline]
                fn sum_to_f64(sum: $sum) -> f64 {
                    sum as f64
                }
            }
        )*
    };
}

impl_stat_element!(i128 => i8, i16, i32, i64, i128, isize);
impl_stat_element!(u128 => u8, u16, u32, u64, u128, usize);
impl_stat_element!(f64 => f32, f64);
