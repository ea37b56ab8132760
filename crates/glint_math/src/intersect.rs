//! Intersection tests for raycasting
//!
//! Provides ray intersection tests against the primitives a host scene
//! adapter needs to answer surface queries:
//! - Plane
//! - Sphere
//! - Triangle (Möller-Trumbore algorithm)
//!
//! All routines return the distance along the (normalized) ray and
//! reject hits behind the origin.

use crate::ray::Ray;
use crate::vector::Vec3;

/// Result of a ray-triangle intersection
#[derive(Clone, Copy, Debug)]
pub struct TriangleHit {
    /// Distance along ray to hit point
    pub distance: f32,
    /// Barycentric coordinates [w, u, v] where w = 1 - u - v
    pub barycentric: [f32; 3],
}

/// Ray-Plane intersection
///
/// The plane is given by a point on it and its normal. Returns `None`
/// for rays parallel to the plane or hits behind the origin.
pub fn ray_plane(ray: &Ray, plane_point: Vec3, plane_normal: Vec3) -> Option<f32> {
    let denom = plane_normal.dot(ray.direction);
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = (plane_point - ray.origin).dot(plane_normal) / denom;
    if t >= 0.0 { Some(t) } else { None }
}

/// Ray-Sphere intersection
///
/// Returns the distance along the ray to the nearest intersection point
/// in front of the origin, or None if the ray doesn't intersect the sphere.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    let t2 = (-b + sqrt_d) / (2.0 * a);

    if t1 > 0.0 {
        Some(t1)
    } else if t2 > 0.0 {
        Some(t2)
    } else {
        None
    }
}

/// Ray-Triangle intersection using Möller-Trumbore algorithm
///
/// Returns the distance and barycentric coordinates, or None if no intersection.
///
/// # Arguments
/// * `ray` - The ray to test
/// * `v0`, `v1`, `v2` - Triangle vertices
/// * `cull_backface` - If true, only front-facing triangles are hit
pub fn ray_triangle(
    ray: &Ray,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    cull_backface: bool,
) -> Option<TriangleHit> {
    const EPSILON: f32 = 0.0000001;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray parallel to the triangle
    if a.abs() < EPSILON {
        return None;
    }

    if cull_backface && a < 0.0 {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    if t > EPSILON {
        Some(TriangleHit {
            distance: t,
            barycentric: [1.0 - u - v, u, v],
        })
    } else {
        None
    }
}
