//! Quaternion for 3D rotations

use crate::vector::Vec3;
use crate::matrix::Mat3;
use core::ops::Mul;

/// Quaternion representing a 3D rotation
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new quaternion
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create from axis and angle (radians)
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let (sin, cos) = half.sin_cos();
        let axis = axis.normalize();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Create from a rotation matrix.
    ///
    /// The matrix must be orthonormal and right-handed; picks the
    /// numerically largest of w, x, y, z as the pivot.
    pub fn from_mat3(m: &Mat3) -> Self {
        let c = &m.cols;
        let trace = c[0].x + c[1].y + c[2].z;

        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(
                (c[1].z - c[2].y) / s,
                (c[2].x - c[0].z) / s,
                (c[0].y - c[1].x) / s,
                0.25 * s,
            )
        } else if c[0].x > c[1].y && c[0].x > c[2].z {
            let s = (1.0 + c[0].x - c[1].y - c[2].z).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (c[0].y + c[1].x) / s,
                (c[2].x + c[0].z) / s,
                (c[1].z - c[2].y) / s,
            )
        } else if c[1].y > c[2].z {
            let s = (1.0 + c[1].y - c[0].x - c[2].z).sqrt() * 2.0;
            Self::new(
                (c[0].y + c[1].x) / s,
                0.25 * s,
                (c[1].z + c[2].y) / s,
                (c[2].x - c[0].z) / s,
            )
        } else {
            let s = (1.0 + c[2].z - c[0].x - c[1].y).sqrt() * 2.0;
            Self::new(
                (c[2].x + c[0].z) / s,
                (c[1].z + c[2].y) / s,
                0.25 * s,
                (c[0].y - c[1].x) / s,
            )
        };

        q.normalize()
    }

    /// Get the length squared
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Get the length
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize the quaternion
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
        } else {
            Self::IDENTITY
        }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// True if both quaternions describe the same rotation (q and -q included)
    #[inline]
    pub fn same_rotation(self, other: Self, epsilon: f32) -> bool {
        (self.dot(other).abs() - 1.0).abs() < epsilon
    }

    /// Rotate a vector
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        v + (uv * self.w + uuv) * 2.0
    }

    /// Convert to 3x3 rotation matrix
    pub fn to_mat3(self) -> Mat3 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx = self.x * x2;
        let xy = self.x * y2;
        let xz = self.x * z2;
        let yy = self.y * y2;
        let yz = self.y * z2;
        let zz = self.z * z2;
        let wx = self.w * x2;
        let wy = self.w * y2;
        let wz = self.w * z2;

        Mat3::from_cols(
            Vec3::new(1.0 - (yy + zz), xy + wz, xz - wy),
            Vec3::new(xy - wz, 1.0 - (xx + zz), yz + wx),
            Vec3::new(xz + wy, yz - wx, 1.0 - (xx + yy)),
        )
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}
