//! Scalar helper functions.
//!
//! The rounding functions here go through a truncating integer cast and then
//! correct the result, rather than using the float methods of the standard
//! library. The cast saturates out-of-range values and maps NaN to zero, and
//! the correction step wraps, so the results at the extremes of the `i32`
//! range follow from those two rules and nothing else.

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating point types that can be floored, ceiled and rounded to integers.
///
/// This trait is sealed and only implemented for [`f32`] and [`f64`].
pub trait Rounding: Copy + private::Sealed {
    /// The integer type produced when rounding to the nearest integer.
    type Rounded: Copy;

    /// See [`floor`].
    fn floor_to_i32(self) -> i32;

    /// See [`ceil`].
    fn ceil_to_i32(self) -> i32;

    /// See [`round`].
    fn round_half_up(self) -> Self::Rounded;

    /// Whether [`floor`] represents the value exactly, without saturating.
    /// False for NaN and the infinities.
    fn floors_within_i32(self) -> bool;
}

macro_rules! impl_rounding {
    ($f:ty, $rounded:ty) => {
        impl Rounding for $f {
            type Rounded = $rounded;

            #[inline]
            fn floor_to_i32(self) -> i32 {
                let truncated = self as i32;
                if self < truncated as $f {
                    truncated.wrapping_sub(1)
                } else {
                    truncated
                }
            }

            #[inline]
            fn ceil_to_i32(self) -> i32 {
                let truncated = self as i32;
                if self > truncated as $f {
                    truncated.wrapping_add(1)
                } else {
                    truncated
                }
            }

            #[inline]
            fn round_half_up(self) -> $rounded {
                let floored = self.floor();
                // Exact for every value that still has a fractional part
                let rounded = if self - floored >= 0.5 {
                    floored + 1.0
                } else {
                    floored
                };
                rounded as $rounded
            }

            #[inline]
            fn floors_within_i32(self) -> bool {
                // Both bounds are powers of two and exact in either width
                self >= i32::MIN as $f && self < -(i32::MIN as $f)
            }
        }
    };
}

impl_rounding!(f32, i32);
impl_rounding!(f64, i64);

/// Restricts `value` to the range `[min, max]`.
///
/// The bounds are not validated. `value < min` is checked first, so when
/// `min > max` a value below `min` yields `min` and any other value above
/// `max` yields `max`. NaN compares false on both sides and is returned
/// unchanged.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Returns the largest integer less than or equal to `value`.
///
/// Computed by truncating toward zero and subtracting one if the truncated
/// value ended up above `value`, so `floor(-1.5) == -2`.
#[inline]
pub fn floor<F: Rounding>(value: F) -> i32 {
    value.floor_to_i32()
}

/// Returns the smallest integer greater than or equal to `value`.
///
/// Computed by truncating toward zero and adding one if the truncated value
/// ended up below `value`, so `ceil(-1.5) == -1`.
#[inline]
pub fn ceil<F: Rounding>(value: F) -> i32 {
    value.ceil_to_i32()
}

/// Rounds `value` to the nearest integer, with ties going toward positive
/// infinity (`round(-1.5) == -1`, `round(2.5) == 3`).
///
/// `f64` rounds into `i64` and `f32` into `i32`.
#[inline]
pub fn round<F: Rounding>(value: F) -> F::Rounded {
    value.round_half_up()
}

/// Computes the square root of a single precision value at double
/// precision.
#[inline]
pub fn sqrt(value: f32) -> f32 {
    f64::from(value).sqrt() as f32
}
