//! Immutable three-component vectors over `f64`, `f32` and `i32`, together
//! with the scalar helpers they are built on.

#[macro_use]
mod macros;

pub mod mth;
pub mod num;
pub mod vector;

pub use num::{FloatScalar, Scalar};
pub use vector::{FloatVector, Vector, Vector3, Vector3d, Vector3f, Vector3i};
