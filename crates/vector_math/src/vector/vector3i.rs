//! Integer vectors.

use crate::{
    mth,
    num::FloatScalar,
    vector::{Vector, Vector3},
};
use anyhow::{Result, bail};
use bytemuck::{NoUninit, Zeroable};
use std::fmt;

/// An immutable 3-dimensional vector with `i32` components.
///
/// Component arithmetic wraps on overflow. Division by zero panics, unless
/// one of the `checked_div_*` methods is used. The length of an integer
/// vector is an `f64`.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[i32; 3]", from = "[i32; 3]")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Zeroable, NoUninit)]
pub struct Vector3i {
    x: i32,
    y: i32,
    z: i32,
}

static CANONICAL_ZERO: Vector3i = Vector3i::ZERO;

impl Vector3i {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Returns the canonical zero vector, which is the same instance on every
    /// call.
    #[inline]
    pub fn zero() -> &'static Self {
        &CANONICAL_ZERO
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(n: i32) -> Self {
        Self::of(n, n, n)
    }

    /// Creates a new vector with the given components, or the canonical zero
    /// vector if they are all zero.
    #[inline]
    pub const fn of(x: i32, y: i32, z: i32) -> Self {
        if x == 0 && y == 0 && z == 0 {
            return Self::ZERO;
        }
        Self { x, y, z }
    }

    /// Creates a new vector by flooring the given floating point components
    /// with [`mth::floor`], so `(1.9, -1.9, 0.0)` becomes `(1, -2, 0)`.
    ///
    /// Components outside the `i32` range saturate before the floor
    /// correction is applied, and NaN becomes zero. Both cases are logged
    /// at trace level.
    pub fn of_floored<F: FloatScalar>(x: F, y: F, z: F) -> Self {
        if !(x.floors_within_i32() && y.floors_within_i32() && z.floors_within_i32()) {
            log::trace!(
                "Flooring components ({x:?}, {y:?}, {z:?}) outside the i32 range into integer vector"
            );
        }
        Self::of(mth::floor(x), mth::floor(y), mth::floor(z))
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Like [`Vector3::div_xyz`], but returns an error instead of panicking
    /// if any divisor is zero.
    pub fn checked_div_xyz(&self, x: i32, y: i32, z: i32) -> Result<Self> {
        if x == 0 || y == 0 || z == 0 {
            bail!(
                "Tried to divide {} by zero component in ({}, {}, {})",
                self,
                x,
                y,
                z
            );
        }
        Ok(self.div_xyz(x, y, z))
    }

    /// Like [`Vector3::div_vector`], but returns an error instead of
    /// panicking if any component of `other` is zero.
    pub fn checked_div_vector(&self, other: &Self) -> Result<Self> {
        self.checked_div_xyz(other.x, other.y, other.z)
    }

    /// Like [`Vector::div_scalar`], but returns an error instead of panicking
    /// if `n` is zero.
    pub fn checked_div_scalar(&self, n: i32) -> Result<Self> {
        self.checked_div_xyz(n, n, n)
    }
}

impl Vector for Vector3i {
    type Scalar = i32;

    #[inline]
    fn map(&self, mut f: impl FnMut(i32) -> i32) -> Self {
        let x = f(self.x);
        let y = f(self.y);
        let z = f(self.z);
        Self::of(x, y, z)
    }

    #[inline]
    fn components(&self) -> impl Iterator<Item = i32> {
        self.array().into_iter()
    }
}

impl Vector3 for Vector3i {
    #[inline]
    fn from_components(x: i32, y: i32, z: i32) -> Self {
        Self::of(x, y, z)
    }

    #[inline]
    fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    fn z(&self) -> i32 {
        self.z
    }
}

impl fmt::Display for Vector3i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3i{{x={}, y={}, z={}}}", self.x, self.y, self.z)
    }
}

impl_vector3_conversions!(Vector3i, i32);

impl_vector3_ops!(Vector3i, i32);
