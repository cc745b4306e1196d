//! Double precision vectors.

use crate::{
    num::Scalar,
    vector::{FloatVector, Vector, Vector3},
};
use bytemuck::{NoUninit, Zeroable};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// An immutable 3-dimensional vector with `f64` components.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 3]", from = "[f64; 3]")
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, NoUninit)]
pub struct Vector3d {
    x: f64,
    y: f64,
    z: f64,
}

static CANONICAL_ZERO: Vector3d = Vector3d::ZERO;

impl Vector3d {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Returns the canonical zero vector, which is the same instance on every
    /// call.
    #[inline]
    pub fn zero() -> &'static Self {
        &CANONICAL_ZERO
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(n: f64) -> Self {
        Self::of(n, n, n)
    }

    /// Creates a new vector with the given components. If they are all zero,
    /// the canonical zero vector is returned, so negative zeros are replaced
    /// by positive ones.
    #[inline]
    pub const fn of(x: f64, y: f64, z: f64) -> Self {
        if x == 0.0 && y == 0.0 && z == 0.0 {
            return Self::ZERO;
        }
        Self { x, y, z }
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }
}

impl Vector for Vector3d {
    type Scalar = f64;

    #[inline]
    fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        let x = f(self.x);
        let y = f(self.y);
        let z = f(self.z);
        Self::of(x, y, z)
    }

    #[inline]
    fn components(&self) -> impl Iterator<Item = f64> {
        self.array().into_iter()
    }
}

impl FloatVector for Vector3d {}

impl Vector3 for Vector3d {
    #[inline]
    fn from_components(x: f64, y: f64, z: f64) -> Self {
        Self::of(x, y, z)
    }

    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn z(&self) -> f64 {
        self.z
    }
}

impl Hash for Vector3d {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash_component(state);
        self.y.hash_component(state);
        self.z.hash_component(state);
    }
}

impl fmt::Display for Vector3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector3d{{x={:.6}, y={:.6}, z={:.6}}}",
            self.x, self.y, self.z
        )
    }
}

impl_vector3_conversions!(Vector3d, f64);

impl_vector3_ops!(Vector3d, f64);

impl_abs_diff_eq!(Vector3d, f64, |a, b, epsilon| {
    ::approx::AbsDiffEq::abs_diff_eq(&a.x, &b.x, epsilon)
        && ::approx::AbsDiffEq::abs_diff_eq(&a.y, &b.y, epsilon)
        && ::approx::AbsDiffEq::abs_diff_eq(&a.z, &b.z, epsilon)
});

impl_relative_eq!(Vector3d, f64, |a, b, epsilon, max_relative| {
    ::approx::RelativeEq::relative_eq(&a.x, &b.x, epsilon, max_relative)
        && ::approx::RelativeEq::relative_eq(&a.y, &b.y, epsilon, max_relative)
        && ::approx::RelativeEq::relative_eq(&a.z, &b.z, epsilon, max_relative)
});
