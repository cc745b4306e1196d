//! Vectors.
//!
//! Every vector type is an immutable value: operations never modify their
//! operands and always produce a new vector through the type's `of`
//! factory, so an all-zero result is always the canonical zero vector of its
//! domain.

mod vector3d;
mod vector3f;
mod vector3i;

pub use vector3d::Vector3d;
pub use vector3f::Vector3f;
pub use vector3i::Vector3i;

use crate::num::{FloatScalar, Scalar};
use num_traits as nt;
use std::fmt;

/// Operations supported by vectors of any domain and dimension.
pub trait Vector: Copy + PartialEq + fmt::Debug {
    /// The type of each component.
    type Scalar: Scalar;

    /// Returns a vector with the given closure applied to each component.
    fn map(&self, f: impl FnMut(Self::Scalar) -> Self::Scalar) -> Self;

    /// Returns an iterator over the components, in order.
    fn components(&self) -> impl Iterator<Item = Self::Scalar>;

    /// Whether every component equals zero.
    #[inline]
    fn is_zero(&self) -> bool {
        self.all_match(|component| nt::Zero::is_zero(&component))
    }

    /// Adds `n` to each component.
    #[inline]
    fn add_scalar(&self, n: Self::Scalar) -> Self {
        self.map(|component| component.component_add(n))
    }

    /// Subtracts `n` from each component.
    #[inline]
    fn sub_scalar(&self, n: Self::Scalar) -> Self {
        self.map(|component| component.component_sub(n))
    }

    /// Multiplies each component by `n`.
    #[inline]
    fn mul_scalar(&self, n: Self::Scalar) -> Self {
        self.map(|component| component.component_mul(n))
    }

    /// Divides each component by `n`.
    ///
    /// # Panics
    /// For integer vectors, if `n` is zero.
    #[inline]
    fn div_scalar(&self, n: Self::Scalar) -> Self {
        self.map(|component| component.component_div(n))
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    fn abs(&self) -> Self {
        self.map(Scalar::component_abs)
    }

    #[inline]
    fn negate(&self) -> Self {
        self.map(Scalar::component_neg)
    }

    /// Raises each component to the given power.
    #[inline]
    fn pow(&self, power: Self::Scalar) -> Self {
        self.map(|component| component.component_pow(power))
    }

    /// Computes the square of the length of the vector, without leaving the
    /// component domain. Integer vectors may overflow.
    #[inline]
    fn length_squared(&self) -> Self::Scalar {
        self.components()
            .fold(<Self::Scalar as nt::Zero>::zero(), |sum, component| {
                sum.component_add(component.component_mul(component))
            })
    }

    /// Computes the length of the vector.
    #[inline]
    fn length(&self) -> <Self::Scalar as Scalar>::Length {
        Scalar::length_from_squared(self.length_squared())
    }

    /// Whether the predicate holds for every component. Stops at the first
    /// component for which it does not.
    #[inline]
    fn all_match(&self, predicate: impl FnMut(Self::Scalar) -> bool) -> bool {
        self.components().all(predicate)
    }

    /// Whether the predicate holds for any component. Stops at the first
    /// component for which it does.
    #[inline]
    fn any_match(&self, predicate: impl FnMut(Self::Scalar) -> bool) -> bool {
        self.components().any(predicate)
    }

    /// Returns the vector itself, which is indistinguishable from a copy.
    #[inline]
    fn copy(&self) -> Self {
        *self
    }
}

/// Operations supported by vectors with floating point components.
pub trait FloatVector: Vector<Scalar: FloatScalar> {
    /// Returns a vector with each component rounded up to an integer value
    /// (see [`FloatScalar::ceiled`]).
    #[inline]
    fn ceil(&self) -> Self {
        self.map(FloatScalar::ceiled)
    }

    /// Returns a vector with each component rounded down to an integer value
    /// (see [`FloatScalar::floored`]).
    #[inline]
    fn floor(&self) -> Self {
        self.map(FloatScalar::floored)
    }

    /// Returns a vector with each component rounded to the nearest integer
    /// value, ties going up.
    #[inline]
    fn round(&self) -> Self {
        self.map(FloatScalar::rounded)
    }

    /// Divides the vector by its length. The zero vector is not special
    /// cased and gives NaN components.
    #[inline]
    fn normalize(&self) -> Self {
        let length = self.length();
        self.map(|component| component.component_div(length))
    }

    #[inline]
    fn all_finite(&self) -> bool {
        self.all_match(FloatScalar::is_finite)
    }

    #[inline]
    fn any_finite(&self) -> bool {
        self.any_match(FloatScalar::is_finite)
    }

    #[inline]
    fn all_infinite(&self) -> bool {
        self.all_match(FloatScalar::is_infinite)
    }

    #[inline]
    fn any_infinite(&self) -> bool {
        self.any_match(FloatScalar::is_infinite)
    }

    #[inline]
    fn all_nan(&self) -> bool {
        self.all_match(FloatScalar::is_nan)
    }

    #[inline]
    fn any_nan(&self) -> bool {
        self.any_match(FloatScalar::is_nan)
    }
}

/// Operations supported by 3-dimensional vectors.
pub trait Vector3: Vector {
    /// Creates a vector with the given components, yielding the canonical
    /// zero vector if they are all zero.
    fn from_components(x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) -> Self;

    /// The x-component.
    fn x(&self) -> Self::Scalar;

    /// The y-component.
    fn y(&self) -> Self::Scalar;

    /// The z-component.
    fn z(&self) -> Self::Scalar;

    /// Returns a copy of the vector with the given x-component.
    #[inline]
    fn with_x(&self, x: Self::Scalar) -> Self {
        Self::from_components(x, self.y(), self.z())
    }

    /// Returns a copy of the vector with the given y-component.
    #[inline]
    fn with_y(&self, y: Self::Scalar) -> Self {
        Self::from_components(self.x(), y, self.z())
    }

    /// Returns a copy of the vector with the given z-component.
    #[inline]
    fn with_z(&self, z: Self::Scalar) -> Self {
        Self::from_components(self.x(), self.y(), z)
    }

    #[inline]
    fn add_xyz(&self, x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) -> Self {
        Self::from_components(
            self.x().component_add(x),
            self.y().component_add(y),
            self.z().component_add(z),
        )
    }

    #[inline]
    fn add_vector(&self, other: &Self) -> Self {
        self.add_xyz(other.x(), other.y(), other.z())
    }

    #[inline]
    fn sub_xyz(&self, x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) -> Self {
        Self::from_components(
            self.x().component_sub(x),
            self.y().component_sub(y),
            self.z().component_sub(z),
        )
    }

    #[inline]
    fn sub_vector(&self, other: &Self) -> Self {
        self.sub_xyz(other.x(), other.y(), other.z())
    }

    #[inline]
    fn mul_xyz(&self, x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) -> Self {
        Self::from_components(
            self.x().component_mul(x),
            self.y().component_mul(y),
            self.z().component_mul(z),
        )
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    fn mul_vector(&self, other: &Self) -> Self {
        self.mul_xyz(other.x(), other.y(), other.z())
    }

    /// # Panics
    /// For integer vectors, if any of the divisors is zero.
    #[inline]
    fn div_xyz(&self, x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) -> Self {
        Self::from_components(
            self.x().component_div(x),
            self.y().component_div(y),
            self.z().component_div(z),
        )
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    ///
    /// # Panics
    /// For integer vectors, if any component of `other` is zero.
    #[inline]
    fn div_vector(&self, other: &Self) -> Self {
        self.div_xyz(other.x(), other.y(), other.z())
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    fn dot(&self, other: &Self) -> Self::Scalar {
        self.x()
            .component_mul(other.x())
            .component_add(self.y().component_mul(other.y()))
            .component_add(self.z().component_mul(other.z()))
    }

    /// Returns a vector where each component is the minimum of the
    /// corresponding component in this and another vector.
    #[inline]
    fn minimum(&self, other: &Self) -> Self {
        self.map_with(other, Scalar::component_min)
    }

    /// Returns a vector where each component is the maximum of the
    /// corresponding component in this and another vector.
    #[inline]
    fn maximum(&self, other: &Self) -> Self {
        self.map_with(other, Scalar::component_max)
    }

    /// Combines each component with the corresponding component in another
    /// vector using the given closure.
    #[inline]
    fn map_with(
        &self,
        other: &Self,
        mut f: impl FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar,
    ) -> Self {
        let x = f(self.x(), other.x());
        let y = f(self.y(), other.y());
        let z = f(self.z(), other.z());
        Self::from_components(x, y, z)
    }

    /// Applies a separate closure to each component.
    #[inline]
    fn map_each(
        &self,
        mut fx: impl FnMut(Self::Scalar) -> Self::Scalar,
        mut fy: impl FnMut(Self::Scalar) -> Self::Scalar,
        mut fz: impl FnMut(Self::Scalar) -> Self::Scalar,
    ) -> Self {
        Self::from_components(fx(self.x()), fy(self.y()), fz(self.z()))
    }

    /// Returns the components as an array `[x, y, z]`.
    #[inline]
    fn array(&self) -> [Self::Scalar; 3] {
        [self.x(), self.y(), self.z()]
    }
}
