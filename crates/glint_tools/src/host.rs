//! Host application collaborators.
//!
//! The tools never talk to a scene, camera or UI directly. The embedding
//! application implements these traits on its own types and hands them to
//! the tools through [`crate::tools::DragTool`] callbacks.

use glint_math::{Quat, Ray, Transform, Vec3};

use crate::gesture::ScreenPoint;

/// Identifier of a scene node (placed object or surface).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// One intersection of a view ray with a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    /// World-space hit point
    pub point: Vec3,
    /// Distance along the ray
    pub distance: f32,
    /// Normal of the face that was hit
    pub face_normal: Vec3,
}

/// Surface picking and ray casting.
pub trait SceneQuery {
    /// Node under the screen point, if any. May be the object being placed.
    fn pick_surface(&self, point: ScreenPoint) -> Option<NodeId>;

    /// All intersections of `ray` with `surface` up to `max_distance`,
    /// in any order.
    fn intersect(&self, surface: NodeId, ray: &Ray, max_distance: f32) -> Vec<SurfaceHit>;

    /// Normal of the surface closest to a world point. Hosts that only
    /// know face normals can leave this as `None`.
    fn closest_normal(&self, _surface: NodeId, _point: Vec3) -> Option<Vec3> {
        None
    }
}

/// The 3D view the gestures happen in.
pub trait Viewport {
    /// World-space ray through a screen point.
    fn screen_to_world_ray(&self, point: ScreenPoint) -> Option<Ray>;

    /// Viewport width in pixels
    fn port_width(&self) -> f32;

    /// Viewport height in pixels
    fn port_height(&self) -> f32;
}

/// Selection and world transforms of scene nodes.
pub trait TransformAccess {
    /// First node of the active selection.
    fn active_selection(&self) -> Option<NodeId>;

    /// World transform of a node.
    fn world_transform(&self, node: NodeId) -> Option<Transform>;

    /// Overwrite the given world components of a node; `None` leaves
    /// the component untouched.
    fn set_world_transform(&mut self, node: NodeId, translation: Option<Vec3>, rotation: Option<Quat>);
}

/// How the camera film gate is fitted into the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilmFit {
    #[default]
    Fill,
    Horizontal,
    Vertical,
    Overscan,
}

/// Camera attributes read at the start of a framing gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraSnapshot {
    pub name: String,
    pub aspect_ratio: f32,
    pub horizontal_pan: f32,
    pub vertical_pan: f32,
    pub zoom: f32,
    pub overscan: f32,
    /// Film aperture width in inches
    pub horizontal_aperture: f32,
    /// Film aperture height in inches
    pub vertical_aperture: f32,
    pub film_fit: FilmFit,
    pub pan_zoom_enabled: bool,
    pub orthographic: bool,
}

impl Default for CameraSnapshot {
    fn default() -> Self {
        Self {
            name: String::from("persp"),
            aspect_ratio: 1.5,
            horizontal_pan: 0.0,
            vertical_pan: 0.0,
            zoom: 1.0,
            overscan: 1.0,
            horizontal_aperture: 1.417,
            vertical_aperture: 0.945,
            film_fit: FilmFit::Fill,
            pan_zoom_enabled: false,
            orthographic: false,
        }
    }
}

/// The camera of the active view.
pub trait CameraAccess {
    /// Current attributes of the active camera.
    fn active_camera(&self) -> Option<CameraSnapshot>;

    /// Set the 2D pan in inches.
    fn set_pan(&mut self, horizontal: f32, vertical: f32);

    /// Set the 2D zoom factor.
    fn set_zoom(&mut self, zoom: f32);

    /// Enable or disable 2D pan/zoom.
    fn set_pan_zoom_enabled(&mut self, enabled: bool);
}

/// Transient in-view messages.
pub trait StatusChannel {
    fn show_status(&mut self, message: &str);

    fn clear_status(&mut self);
}
