//! Utility macros.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

/// Implements the arithmetic operators of a three-component vector type in
/// terms of its [`Vector`](crate::vector::Vector) and
/// [`Vector3`](crate::vector::Vector3) methods. No assigning operators are
/// implemented, since vectors are never modified in place.
macro_rules! impl_vector3_ops {
    ($t:ty, $s:ty) => {
        impl_binop!(Add, add, $t, $t, $t, |a, b| {
            $crate::vector::Vector3::add_vector(a, b)
        });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| {
            $crate::vector::Vector3::sub_vector(a, b)
        });

        impl_binop!(Mul, mul, $t, $s, $t, |a, b| {
            $crate::vector::Vector::mul_scalar(a, *b)
        });

        impl_binop!(Mul, mul, $s, $t, $t, |a, b| {
            $crate::vector::Vector::mul_scalar(b, *a)
        });

        impl_binop!(Div, div, $t, $s, $t, |a, b| {
            $crate::vector::Vector::div_scalar(a, *b)
        });

        impl_unary_op!(Neg, neg, $t, $t, |val| {
            $crate::vector::Vector::negate(val)
        });
    };
}

/// Implements conversions between a three-component vector type and arrays
/// and slices of its scalar type. Conversions into the vector go through
/// the vector's `of` factory.
macro_rules! impl_vector3_conversions {
    ($t:ident, $s:ty) => {
        impl From<[$s; 3]> for $t {
            #[inline]
            fn from([x, y, z]: [$s; 3]) -> Self {
                Self::of(x, y, z)
            }
        }

        impl From<$t> for [$s; 3] {
            #[inline]
            fn from(vector: $t) -> Self {
                $crate::vector::Vector3::array(&vector)
            }
        }

        impl TryFrom<&[$s]> for $t {
            type Error = ::anyhow::Error;

            fn try_from(components: &[$s]) -> ::anyhow::Result<Self> {
                match *components {
                    [x, y, z] => Ok(Self::of(x, y, z)),
                    _ => ::anyhow::bail!(
                        "Expected 3 components for {}, got {}",
                        stringify!($t),
                        components.len()
                    ),
                }
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, $epsilon:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = $epsilon;

            fn default_epsilon() -> Self::Epsilon {
                <$epsilon as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, $epsilon:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <$epsilon as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}
