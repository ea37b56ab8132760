//! Reflection placer state.

use glint_math::Vec3;

use crate::host::NodeId;

/// Mirror reflection found by the last place-mode update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reflection {
    /// World-space hit point on the surface
    pub point: Vec3,
    /// Unit direction leaving the surface
    pub vector: Vec3,
}

impl Reflection {
    /// Position `distance` units along the reflected ray.
    #[inline]
    pub fn position_at(&self, distance: f32) -> Vec3 {
        self.point + self.vector * distance
    }
}

/// Where the placer is in its gesture lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlacerPhase {
    /// Nothing placed yet and no gesture running
    #[default]
    Idle,
    /// A reflection is known; move mode is available
    Armed,
    /// Plain drag following the cursor across surfaces
    Placing,
    /// Modifier drag sliding along the stored reflection
    Moving,
}

/// State of the reflection placer.
///
/// `reflection`, `base_distance` and `move_distance` live for the whole
/// tool session; `target` and `last_surface` only for one gesture.
#[derive(Clone, Debug, Default)]
pub struct ReflectionState {
    /// Set by a successful place update; its presence arms move mode
    pub reflection: Option<Reflection>,
    /// Distance the current gesture scales in move mode
    pub base_distance: f32,
    /// Distance of the object from the reflection point
    pub move_distance: f32,
    /// Object being placed
    pub target: Option<NodeId>,
    /// Surface of the last hit, used while the target covers the cursor
    pub last_surface: Option<NodeId>,
    phase: PlacerPhase,
}

impl ReflectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once something has been placed.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.reflection.is_some()
    }

    pub fn phase(&self) -> PlacerPhase {
        self.phase
    }

    /// Start a gesture: continue from where the last one stopped.
    pub fn begin_gesture(&mut self, target: NodeId) {
        self.target = Some(target);
        self.base_distance = self.move_distance;
    }

    /// End a gesture, keeping the session fields.
    pub fn end_gesture(&mut self) {
        self.target = None;
        self.last_surface = None;
        self.phase = self.resting_phase();
    }

    /// Forget everything, as on tool deactivation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a place-mode result. Base and move distance both take the
    /// object's current distance from the hit point.
    pub fn place(&mut self, reflection: Reflection, distance: f32) {
        self.reflection = Some(reflection);
        self.base_distance = distance;
        self.move_distance = distance;
        self.phase = PlacerPhase::Placing;
    }

    /// Scale the base distance by the horizontal drag offset.
    pub fn slide(&mut self, offset_x: f32, speed: f32) -> f32 {
        self.move_distance = self.base_distance * (1.0 + offset_x * speed);
        self.phase = PlacerPhase::Moving;
        self.move_distance
    }

    fn resting_phase(&self) -> PlacerPhase {
        if self.is_armed() {
            PlacerPhase::Armed
        } else {
            PlacerPhase::Idle
        }
    }
}
