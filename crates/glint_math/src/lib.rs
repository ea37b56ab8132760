//! # glint_math - Placement Math
//!
//! Small f32 math primitives used by the interactive placement tools:
//! vectors, rotation matrices, quaternions, transforms, rays and
//! ray-primitive intersection.

pub mod vector;
pub mod matrix;
pub mod quaternion;
pub mod transform;
pub mod ray;
pub mod intersect;

pub use vector::*;
pub use matrix::*;
pub use quaternion::*;
pub use transform::*;
pub use ray::*;
pub use intersect::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const FRAC_PI_2: f32 = PI / 2.0;
}

pub mod prelude {
    pub use crate::vector::{Vec2, Vec3};
    pub use crate::matrix::Mat3;
    pub use crate::quaternion::Quat;
    pub use crate::transform::Transform;
    pub use crate::ray::Ray;
    pub use crate::intersect::{ray_plane, ray_sphere, ray_triangle, TriangleHit};
}
