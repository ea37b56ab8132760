//! Scripted host shared by the integration tests.
//!
//! The scene is analytic: planes, spheres and triangles intersected with the
//! glint_math routines. The view looks down -Z from `eye`, tilted
//! downwards so the middle of the viewport sees the floor at the origin.

#![allow(dead_code)]

use std::collections::HashMap;

use glint_math::{ray_plane, ray_sphere, ray_triangle, Quat, Ray, Transform, Vec3};
use glint_tools::*;

pub const PORT_WIDTH: f32 = 800.0;
pub const PORT_HEIGHT: f32 = 600.0;
pub const FOCAL: f32 = 600.0;

pub const FLOOR: NodeId = NodeId(1);
pub const BALL: NodeId = NodeId(2);
pub const LIGHT: NodeId = NodeId(10);

/// Viewport center, looking at the floor origin.
pub const CENTER: ScreenPoint = ScreenPoint::new(PORT_WIDTH / 2.0, PORT_HEIGHT / 2.0);

#[derive(Clone, Copy, Debug)]
pub enum Shape {
    Plane { point: Vec3, normal: Vec3 },
    Sphere { center: Vec3, radius: f32 },
    Triangle { v0: Vec3, v1: Vec3, v2: Vec3 },
}

impl Shape {
    fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        let distance = match *self {
            Shape::Plane { point, normal } => ray_plane(ray, point, normal)?,
            Shape::Sphere { center, radius } => ray_sphere(ray, center, radius)?,
            Shape::Triangle { v0, v1, v2 } => ray_triangle(ray, v0, v1, v2, false)?.distance,
        };
        let point = ray.at(distance);
        let face_normal = match *self {
            Shape::Plane { normal, .. } => normal,
            Shape::Sphere { center, .. } => (point - center).normalize(),
            Shape::Triangle { v0, v1, v2 } => (v1 - v0).cross(v2 - v0).normalize(),
        };
        Some(SurfaceHit {
            point,
            distance,
            face_normal,
        })
    }
}

pub struct TestHost {
    pub eye: Vec3,
    pub port_width: f32,
    pub port_height: f32,
    pub surfaces: Vec<(NodeId, Shape)>,
    pub transforms: HashMap<NodeId, Transform>,
    pub selection: Option<NodeId>,
    /// Forces `pick_surface` to report this node, e.g. the placed object
    pub cursor_over: Option<NodeId>,
    pub camera: Option<CameraSnapshot>,
    pub status: Option<String>,
    pub transform_writes: usize,
}

impl TestHost {
    /// Floor plane at y = 0 and a light selected at (0, 3, 0).
    pub fn new() -> Self {
        let mut transforms = HashMap::new();
        transforms.insert(LIGHT, Transform::from_position(Vec3::new(0.0, 3.0, 0.0)));

        Self {
            eye: Vec3::new(0.0, 5.0, 10.0),
            port_width: PORT_WIDTH,
            port_height: PORT_HEIGHT,
            surfaces: vec![(
                FLOOR,
                Shape::Plane {
                    point: Vec3::ZERO,
                    normal: Vec3::Y,
                },
            )],
            transforms,
            selection: Some(LIGHT),
            cursor_over: None,
            camera: Some(CameraSnapshot::default()),
            status: None,
            transform_writes: 0,
        }
    }

    /// Host with an HD viewport and a matching camera.
    pub fn hd() -> Self {
        let mut host = Self::new();
        host.port_width = 1920.0;
        host.port_height = 1080.0;
        host.camera = Some(CameraSnapshot {
            name: String::from("shotCam"),
            aspect_ratio: 1.78,
            film_fit: FilmFit::Horizontal,
            ..Default::default()
        });
        host
    }

    pub fn light(&self) -> Transform {
        self.transforms[&LIGHT]
    }

    pub fn camera(&self) -> &CameraSnapshot {
        self.camera.as_ref().expect("test host has a camera")
    }

    pub fn camera_mut(&mut self) -> &mut CameraSnapshot {
        self.camera.as_mut().expect("test host has a camera")
    }

    fn shape(&self, node: NodeId) -> Option<Shape> {
        self.surfaces.iter().find(|(id, _)| *id == node).map(|(_, shape)| *shape)
    }
}

impl SceneQuery for TestHost {
    fn pick_surface(&self, point: ScreenPoint) -> Option<NodeId> {
        if self.cursor_over.is_some() {
            return self.cursor_over;
        }
        let ray = self.screen_to_world_ray(point)?;
        self.surfaces
            .iter()
            .filter_map(|(id, shape)| shape.hit(&ray).map(|hit| (*id, hit.distance)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    fn intersect(&self, surface: NodeId, ray: &Ray, max_distance: f32) -> Vec<SurfaceHit> {
        self.shape(surface)
            .and_then(|shape| shape.hit(ray))
            .filter(|hit| hit.distance <= max_distance)
            .into_iter()
            .collect()
    }

    fn closest_normal(&self, surface: NodeId, point: Vec3) -> Option<Vec3> {
        match self.shape(surface)? {
            Shape::Sphere { center, .. } => Some((point - center).normalize()),
            Shape::Plane { .. } | Shape::Triangle { .. } => None,
        }
    }
}

impl Viewport for TestHost {
    fn screen_to_world_ray(&self, point: ScreenPoint) -> Option<Ray> {
        let direction = Vec3::new(
            (point.x - self.port_width / 2.0) / FOCAL,
            (point.y - self.port_height / 2.0) / FOCAL - 0.5,
            -1.0,
        );
        Some(Ray::new(self.eye, direction))
    }

    fn port_width(&self) -> f32 {
        self.port_width
    }

    fn port_height(&self) -> f32 {
        self.port_height
    }
}

impl TransformAccess for TestHost {
    fn active_selection(&self) -> Option<NodeId> {
        self.selection
    }

    fn world_transform(&self, node: NodeId) -> Option<Transform> {
        self.transforms.get(&node).copied()
    }

    fn set_world_transform(&mut self, node: NodeId, translation: Option<Vec3>, rotation: Option<Quat>) {
        if let Some(transform) = self.transforms.get_mut(&node) {
            transform.apply_partial(translation, rotation);
            self.transform_writes += 1;
        }
    }
}

impl CameraAccess for TestHost {
    fn active_camera(&self) -> Option<CameraSnapshot> {
        self.camera.clone()
    }

    fn set_pan(&mut self, horizontal: f32, vertical: f32) {
        if let Some(camera) = self.camera.as_mut() {
            camera.horizontal_pan = horizontal;
            camera.vertical_pan = vertical;
        }
    }

    fn set_zoom(&mut self, zoom: f32) {
        if let Some(camera) = self.camera.as_mut() {
            camera.zoom = zoom;
        }
    }

    fn set_pan_zoom_enabled(&mut self, enabled: bool) {
        if let Some(camera) = self.camera.as_mut() {
            camera.pan_zoom_enabled = enabled;
        }
    }
}

impl StatusChannel for TestHost {
    fn show_status(&mut self, message: &str) {
        self.status = Some(message.to_string());
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Route log output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Press, drag through `path` and release with one modifier.
pub fn drag<T>(tool: &mut T, host: &mut TestHost, modifier: Modifier, path: &[ScreenPoint]) -> ToolResult
where
    T: DragTool<TestHost>,
{
    let Some((&anchor, rest)) = path.split_first() else {
        return ToolResult::None;
    };
    let mut gesture = Gesture::press(anchor, modifier);
    tool.on_press(&gesture, host);
    for &point in rest {
        gesture = gesture.moved_to(point);
        tool.on_drag(&gesture, host);
    }
    tool.on_release(&gesture, host)
}
