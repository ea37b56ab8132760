//! Reflection geometry: mirror vector, nearest hit and aim orientation.

use glint_math::{Mat3, Quat, Vec3};

use crate::error::{Result, ToolError};
use crate::host::SurfaceHit;
use crate::preferences::AimAxis;

/// Up vector used to build the aim frame.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Up vector used when the aim direction is parallel to [`WORLD_UP`].
pub const FALLBACK_UP: Vec3 = Vec3::Z;

const PARALLEL_EPSILON: f32 = 1e-6;

/// Mirror a view direction about a surface normal.
///
/// Both inputs are normalized first; the sign of the normal does not
/// matter.
pub fn reflection_vector(view: Vec3, normal: Vec3) -> Result<Vec3> {
    let view = view.normalize_or_zero();
    let normal = normal.normalize_or_zero();
    if view == Vec3::ZERO || !view.is_finite() {
        return Err(ToolError::DegenerateGeometry("zero-length view direction"));
    }
    if normal == Vec3::ZERO || !normal.is_finite() {
        return Err(ToolError::DegenerateGeometry("zero-length surface normal"));
    }

    let reflected = view.reflect(normal).normalize_or_zero();
    if reflected == Vec3::ZERO {
        return Err(ToolError::DegenerateGeometry("zero-length reflection vector"));
    }
    Ok(reflected)
}

/// Closest hit in front of the ray origin, within `max_distance`.
pub fn nearest_hit<I>(hits: I, max_distance: f32) -> Option<SurfaceHit>
where
    I: IntoIterator<Item = SurfaceHit>,
{
    hits.into_iter()
        .filter(|hit| hit.distance.is_finite() && (0.0..=max_distance).contains(&hit.distance))
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Orthonormal right-handed frame of a placed object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AimFrame {
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub z_axis: Vec3,
}

impl AimFrame {
    pub fn axis(&self, axis: AimAxis) -> Vec3 {
        match axis {
            AimAxis::X => self.x_axis,
            AimAxis::Y => self.y_axis,
            AimAxis::Z => self.z_axis,
        }
    }

    /// Rotation matrix whose columns are the frame axes.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols(self.x_axis, self.y_axis, self.z_axis)
    }

    pub fn to_quat(&self) -> Quat {
        Quat::from_mat3(&self.to_mat3())
    }
}

/// Build the frame that points `axis` along `aim` (or against it when
/// `invert` is set).
///
/// With `a` the signed aim, `c1 = normalize(a × up)` and `c2 = a × c1`
/// the frame axes are:
///
/// | axis | x     | y     | z     |
/// |------|-------|-------|-------|
/// | X    | `a`   | `-c2` | `c1`  |
/// | Y    | `-c2` | `a`   | `-c1` |
/// | Z    | `-c1` | `-c2` | `a`   |
///
/// `-c2` carries the up direction, so the object stays upright where
/// the aim axis allows it.
pub fn aim_frame(aim: Vec3, axis: AimAxis, invert: bool) -> Result<AimFrame> {
    let aim = aim.normalize_or_zero();
    if aim == Vec3::ZERO || !aim.is_finite() {
        return Err(ToolError::DegenerateGeometry("zero-length aim vector"));
    }
    let a = if invert { -aim } else { aim };

    let mut side = a.cross(WORLD_UP);
    if side.length() < PARALLEL_EPSILON {
        log::debug!("Aim vector parallel to world up, using fallback up");
        side = a.cross(FALLBACK_UP);
    }
    let c1 = side.normalize();
    let c2 = a.cross(c1).normalize();

    let (x_axis, y_axis, z_axis) = match axis {
        AimAxis::X => (a, -c2, c1),
        AimAxis::Y => (-c2, a, -c1),
        AimAxis::Z => (-c1, -c2, a),
    };

    Ok(AimFrame { x_axis, y_axis, z_axis })
}

/// Rotation that points `axis` along `aim`.
pub fn aim_rotation(aim: Vec3, axis: AimAxis, invert: bool) -> Result<Quat> {
    aim_frame(aim, axis, invert).map(|frame| frame.to_quat())
}
