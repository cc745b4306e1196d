//! Numbers and numerics.

use crate::mth::{self, Rounding};
use num_traits as nt;
use std::{
    cmp,
    fmt,
    hash::{Hash, Hasher},
};

/// Arithmetic on a single vector component.
///
/// All vector types perform their component arithmetic through this trait,
/// so the three domains share one definition of every vector operation.
/// Integer arithmetic wraps on overflow in every build profile, while
/// floating point arithmetic follows IEEE 754.
pub trait Scalar: Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + nt::Zero {
    /// The type of the length of a vector with components of this type.
    type Length: Copy + PartialEq + fmt::Debug;

    fn component_add(self, rhs: Self) -> Self;

    fn component_sub(self, rhs: Self) -> Self;

    fn component_mul(self, rhs: Self) -> Self;

    /// # Panics
    /// For integers, if `rhs` is zero.
    fn component_div(self, rhs: Self) -> Self;

    fn component_neg(self) -> Self;

    fn component_abs(self) -> Self;

    fn component_pow(self, power: Self) -> Self;

    fn component_min(self, other: Self) -> Self;

    fn component_max(self, other: Self) -> Self;

    /// Takes the square root of a squared vector length.
    fn length_from_squared(squared: Self) -> Self::Length;

    /// Feeds the component to the given hasher. Components that compare
    /// equal hash equally.
    fn hash_component<H: Hasher>(self, state: &mut H);
}

/// Component arithmetic specific to floating point domains.
pub trait FloatScalar: Scalar<Length = Self> + Rounding {
    /// Floors the value through [`mth::floor`], so the result is limited to
    /// the `i32` range and NaN becomes zero.
    fn floored(self) -> Self;

    /// Ceils the value through [`mth::ceil`], so the result is limited to
    /// the `i32` range and NaN becomes zero.
    fn ceiled(self) -> Self;

    /// Rounds the value half up through [`mth::round`].
    fn rounded(self) -> Self;

    fn is_finite(self) -> bool;

    fn is_infinite(self) -> bool;

    fn is_nan(self) -> bool;
}

macro_rules! impl_float_scalar {
    (
        $f:ident,
        pow = |$base:ident, $power:ident| $pow:expr,
        length = |$squared:ident| $length:expr
    ) => {
        impl Scalar for $f {
            type Length = $f;

            #[inline]
            fn component_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn component_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn component_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn component_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline]
            fn component_neg(self) -> Self {
                -self
            }

            #[inline]
            fn component_abs(self) -> Self {
                self.abs()
            }

            #[inline]
            fn component_pow(self, power: Self) -> Self {
                let $base = self;
                let $power = power;
                $pow
            }

            #[inline]
            fn component_min(self, other: Self) -> Self {
                if self.is_nan() || other.is_nan() {
                    $f::NAN
                } else if self == other {
                    // -0.0 is considered smaller than 0.0
                    if self.is_sign_negative() { self } else { other }
                } else if self < other {
                    self
                } else {
                    other
                }
            }

            #[inline]
            fn component_max(self, other: Self) -> Self {
                if self.is_nan() || other.is_nan() {
                    $f::NAN
                } else if self == other {
                    if self.is_sign_positive() { self } else { other }
                } else if self > other {
                    self
                } else {
                    other
                }
            }

            #[inline]
            fn length_from_squared($squared: Self) -> Self {
                $length
            }

            #[inline]
            fn hash_component<H: Hasher>(self, state: &mut H) {
                let bits = if self == 0.0 {
                    $f::to_bits(0.0)
                } else {
                    self.to_bits()
                };
                bits.hash(state);
            }
        }

        #[allow(clippy::cast_lossless)]
        impl FloatScalar for $f {
            #[inline]
            fn floored(self) -> Self {
                mth::floor(self) as $f
            }

            #[inline]
            fn ceiled(self) -> Self {
                mth::ceil(self) as $f
            }

            #[inline]
            fn rounded(self) -> Self {
                mth::round(self) as $f
            }

            #[inline]
            fn is_finite(self) -> bool {
                $f::is_finite(self)
            }

            #[inline]
            fn is_infinite(self) -> bool {
                $f::is_infinite(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                $f::is_nan(self)
            }
        }
    };
}

impl_float_scalar!(
    f64,
    pow = |base, power| base.powf(power),
    length = |squared| squared.sqrt()
);

impl_float_scalar!(
    f32,
    pow = |base, power| f64::from(base).powf(f64::from(power)) as f32,
    length = |squared| mth::sqrt(squared)
);

impl Scalar for i32 {
    type Length = f64;

    #[inline]
    fn component_add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline]
    fn component_sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline]
    fn component_mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }

    #[inline]
    fn component_div(self, rhs: Self) -> Self {
        self.wrapping_div(rhs)
    }

    #[inline]
    fn component_neg(self) -> Self {
        self.wrapping_neg()
    }

    #[inline]
    fn component_abs(self) -> Self {
        self.wrapping_abs()
    }

    #[inline]
    fn component_pow(self, power: Self) -> Self {
        mth::floor(f64::from(self).powf(f64::from(power)))
    }

    #[inline]
    fn component_min(self, other: Self) -> Self {
        cmp::min(self, other)
    }

    #[inline]
    fn component_max(self, other: Self) -> Self {
        cmp::max(self, other)
    }

    #[inline]
    fn length_from_squared(squared: Self) -> f64 {
        f64::from(squared).sqrt()
    }

    #[inline]
    fn hash_component<H: Hasher>(self, state: &mut H) {
        self.hash(state);
    }
}
