//! 3x3 rotation matrices

use crate::vector::Vec3;
use core::ops::Mul;

/// 3x3 matrix (column-major)
///
/// For a rotation, column `i` is the world-space direction of the
/// local axis `i`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    pub cols: [Vec3; 3],
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        cols: [Vec3::X, Vec3::Y, Vec3::Z],
    };

    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    #[inline]
    pub fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self::from_cols(r0, r1, r2).transpose()
    }

    #[inline]
    pub fn col(&self, index: usize) -> Vec3 {
        self.cols[index]
    }

    #[inline]
    pub fn row(&self, index: usize) -> Vec3 {
        let c = &self.cols;
        match index {
            0 => Vec3::new(c[0].x, c[1].x, c[2].x),
            1 => Vec3::new(c[0].y, c[1].y, c[2].y),
            2 => Vec3::new(c[0].z, c[1].z, c[2].z),
            _ => panic!("Mat3 row index out of range: {}", index),
        }
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.cols[0].dot(self.cols[1].cross(self.cols[2]))
    }

    /// True if the columns form a right-handed orthonormal basis
    pub fn is_rotation(&self, epsilon: f32) -> bool {
        let [x, y, z] = self.cols;
        (x.length() - 1.0).abs() < epsilon
            && (y.length() - 1.0).abs() < epsilon
            && (z.length() - 1.0).abs() < epsilon
            && x.dot(y).abs() < epsilon
            && y.dot(z).abs() < epsilon
            && z.dot(x).abs() < epsilon
            && (self.determinant() - 1.0).abs() < epsilon
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z
    }
}
