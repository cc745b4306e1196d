//! Single precision vectors.

use crate::{
    num::Scalar,
    vector::{FloatVector, Vector, Vector3},
};
use bytemuck::{NoUninit, Zeroable};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// An immutable 3-dimensional vector with `f32` components.
///
/// Operations that lose precision in single precision arithmetic, such as
/// [`Vector::length`] and [`Vector::pow`], are computed in double precision
/// and narrowed afterwards.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 3]", from = "[f32; 3]")
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, NoUninit)]
pub struct Vector3f {
    x: f32,
    y: f32,
    z: f32,
}

static CANONICAL_ZERO: Vector3f = Vector3f::ZERO;

impl Vector3f {
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
    pub const fn same(n: f32) -> Self {
        Self::of(n, n, n)
    }

    /// Creates a new vector with the given components. If they are all zero,
    /// the canonical zero vector is returned.
    #[inline]
    pub const fn of(x: f32, y: f32, z: f32) -> Self {
        if x == 0.0 && y == 0.0 && z == 0.0 {
            return Self::ZERO;
        }
        Self { x, y, z }
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }
}

impl Vector for Vector3f {
    type Scalar = f32;

    #[inline]
    fn map(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        let x = f(self.x);
        let y = f(self.y);
        let z = f(self.z);
        Self::of(x, y, z)
    }

    #[inline]
    fn components(&self) -> impl Iterator<Item = f32> {
        self.array().into_iter()
    }
}

impl FloatVector for Vector3f {}

impl Vector3 for Vector3f {
    #[inline]
    fn from_components(x: f32, y: f32, z: f32) -> Self {
        Self::of(x, y, z)
    }

    #[inline]
    fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    fn z(&self) -> f32 {
        self.z
    }
}

impl Hash for Vector3f {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash_component(state);
        self.y.hash_component(state);
        self.z.hash_component(state);
    }
}

impl fmt::Display for Vector3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector3f{{x={:.6}, y={:.6}, z={:.6}}}",
            self.x, self.y, self.z
        )
    }
}

impl_vector3_conversions!(Vector3f, f32);

impl_vector3_ops!(Vector3f, f32);

impl_abs_diff_eq!(Vector3f, f32, |a, b, epsilon| {
    ::approx::AbsDiffEq::abs_diff_eq(&a.x, &b.x, epsilon)
        && ::approx::AbsDiffEq::abs_diff_eq(&a.y, &b.y, epsilon)
        && ::approx::AbsDiffEq::abs_diff_eq(&a.z, &b.z, epsilon)
});

impl_relative_eq!(Vector3f, f32, |a, b, epsilon, max_relative| {
    ::approx::RelativeEq::relative_eq(&a.x, &b.x, epsilon, max_relative)
        && ::approx::RelativeEq::relative_eq(&a.y, &b.y, epsilon, max_relative)
        && ::approx::RelativeEq::relative_eq(&a.z, &b.z, epsilon, max_relative)
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mth;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    fn of(x: f32, y: f32, z: f32) -> Vector3f {
        Vector3f::of(x, y, z)
    }

    #[test]
    fn zero_is_same_instance_every_time() {
        assert!(std::ptr::eq(Vector3f::zero(), Vector3f::zero()));
        assert_eq!(Vector3f::same(0.0), *Vector3f::zero());
        assert_eq!(of(0.0, 0.0, 0.0), *Vector3f::zero());
        assert!(of(-0.0, -0.0, 0.0).x().is_sign_positive());
    }

    #[test]
    fn setting_components_gives_new_vectors() {
        let v = of(1.0, 2.0, 3.0);
        assert_eq!(v.with_x(4.0), of(4.0, 2.0, 3.0));
        assert_eq!(v.with_y(4.0), of(1.0, 4.0, 3.0));
        assert_eq!(v.with_z(4.0), of(1.0, 2.0, 4.0));
        assert_eq!(v, of(1.0, 2.0, 3.0));
    }

    #[test]
    fn componentwise_arithmetic_works() {
        let zero = Vector3f::zero();
        assert_eq!(zero.add_xyz(1.0, 2.0, 3.0), of(1.0, 2.0, 3.0));
        assert_eq!(zero.sub_vector(&of(1.0, 2.0, 3.0)), of(-1.0, -2.0, -3.0));
        assert_eq!(Vector3f::same(1.0).mul_xyz(1.0, 2.0, 3.0), of(1.0, 2.0, 3.0));

        let v = of(2.0, 3.0, 4.0);
        assert_eq!(v.div_xyz(2.0, 2.0, 2.0), of(1.0, 1.5, 2.0));
        assert_eq!(v.div_vector(&Vector3f::same(2.0)), of(1.0, 1.5, 2.0));
        assert_eq!(v.div_scalar(2.0), of(1.0, 1.5, 2.0));
        assert_eq!(v / 2.0, of(1.0, 1.5, 2.0));
    }

    #[test]
    fn abs_and_negate_work() {
        assert_eq!(of(-2.0, -3.0, -4.0).abs(), of(2.0, 3.0, 4.0));
        assert_eq!(of(1.0, 2.0, 3.0).negate(), of(-1.0, -2.0, -3.0));
        assert_eq!(-of(1.0, 2.0, 3.0), of(-1.0, -2.0, -3.0));
    }

    #[test]
    fn ceil_floor_and_round_stay_in_domain() {
        assert_eq!(of(1.2, 2.3, 3.4).ceil(), of(2.0, 3.0, 4.0));
        assert_eq!(of(1.2, 2.3, 3.4).floor(), of(1.0, 2.0, 3.0));
        assert_eq!(of(2.3, 4.6, 6.4).round(), of(2.0, 5.0, 6.0));
        assert_eq!(of(-0.5, -1.5, 0.5).round(), of(0.0, -1.0, 1.0));
    }

    #[test]
    fn normalizing_works() {
        assert_eq!(of(0.0, 2.0, 0.0).normalize(), of(0.0, 1.0, 0.0));
        let normalized = of(1.0, 2.0, 2.0).normalize();
        assert_abs_diff_eq!(normalized, of(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector_gives_nan() {
        assert!(Vector3f::zero().normalize().all_nan());
    }

    #[test]
    fn pow_is_computed_in_double_precision() {
        assert_eq!(of(2.0, 4.0, 6.0).pow(2.0), of(4.0, 16.0, 36.0));
        let expected = (f64::from(1.1_f32).powf(f64::from(2.2_f32))) as f32;
        assert_eq!(Vector3f::same(1.1).pow(2.2), Vector3f::same(expected));
    }

    #[test]
    fn computing_length_works() {
        let v = of(3.0, 4.0, 5.0);
        assert_eq!(v.length_squared(), 50.0);
        assert_eq!(v.length(), mth::sqrt(50.0));
        assert_abs_diff_eq!(v.length(), 5.0 * mth::sqrt(2.0), epsilon = 1e-5);
    }

    #[test]
    fn minimum_and_maximum_work() {
        let a = of(2.1, 5.1, 8.1);
        let b = of(3.2, 4.3, 9.4);
        assert_eq!(a.minimum(&b), of(2.1, 4.3, 8.1));
        assert_eq!(a.maximum(&b), of(3.2, 5.1, 9.4));
    }

    #[test]
    fn array_and_components_are_in_order() {
        assert_eq!(Vector3f::zero().array(), [0.0, 0.0, 0.0]);
        assert_eq!(of(1.0, 2.0, 3.0).array(), [1.0, 2.0, 3.0]);
        assert!(of(1.0, 2.0, 3.0).components().eq([1.0, 2.0, 3.0]));
    }

    #[test]
    fn mapping_works() {
        assert_eq!(
            Vector3f::zero().map_each(|x| x + 1.0, |y| y + 1.0, |z| z + 1.0),
            Vector3f::same(1.0)
        );
        assert_eq!(of(1.0, -2.0, 3.0).map(f32::abs), of(1.0, 2.0, 3.0));
    }

    #[test]
    fn finiteness_queries_compose_over_components() {
        let partly_nan = of(0.0, f32::NAN, 0.0);
        assert!(!partly_nan.all_finite());
        assert!(partly_nan.any_finite());
        assert!(!partly_nan.all_nan());
        assert!(partly_nan.any_nan());
        assert!(of(0.0, f32::INFINITY, 0.0).any_infinite());
        assert!(!of(0.0, f32::INFINITY, 0.0).all_infinite());
        assert!(Vector3f::same(f32::NEG_INFINITY).all_infinite());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(*Vector3f::zero(), of(0.0, 0.0, 0.0));
        assert_ne!(*Vector3f::zero(), of(0.0, 0.0, 1.0));
    }

    #[test]
    fn dot_product_works() {
        let ones = Vector3f::same(1.0);
        assert_eq!(ones.dot(Vector3f::zero()), 0.0);
        assert_eq!(ones.dot(&ones), 3.0);
        assert_eq!(of(3.0, 2.0, 4.0).dot(&of(1.0, -2.0, 1.0)), 3.0);
    }

    #[test]
    fn display_includes_type_and_components() {
        assert_eq!(
            of(0.5, 2.0, -3.0).to_string(),
            "Vector3f{x=0.500000, y=2.000000, z=-3.000000}"
        );
    }

    #[test]
    fn converting_from_slice_requires_three_components() {
        assert_eq!(
            Vector3f::try_from([1.0_f32, 2.0, 3.0].as_slice()).unwrap(),
            of(1.0, 2.0, 3.0)
        );
        let error = Vector3f::try_from([1.0_f32].as_slice()).unwrap_err();
        assert!(error.to_string().contains("got 1"));
    }

    #[test]
    fn slices_of_vectors_can_be_viewed_as_components() {
        let vectors = [of(1.0, 2.0, 3.0), *Vector3f::zero()];
        let components: &[f32] = bytemuck::cast_slice(&vectors);
        assert_eq!(components, &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
        let zeroed: Vector3f = Zeroable::zeroed();
        assert_eq!(bytemuck::bytes_of(&zeroed), bytemuck::bytes_of(Vector3f::zero()));
    }
}
