//! Reflection placement tool.
//!
//! A plain drag places the selection so that the view ray, mirrored off
//! the surface under the cursor, passes through it. A shift or ctrl drag
//! slides the selection along the last reflection instead.

use glint_math::{Quat, Ray, Vec3};

use crate::error::{PreferenceError, Result, ToolError};
use crate::gesture::{DragGesture, ScreenPoint};
use crate::host::{NodeId, SceneQuery, StatusChannel, TransformAccess, Viewport};
use crate::preferences::{PlacementPreferences, PreferenceStore};
use crate::tools::{DragTool, ToolId, ToolResult};

use super::geometry::{aim_rotation, nearest_hit, reflection_vector};
use super::state::{PlacerPhase, Reflection, ReflectionState};

pub const PLACE_REFLECTION_TOOL_ID: ToolId = ToolId("place_reflection");

/// Farthest surface hit considered along the view ray.
pub const MAX_RAY_DISTANCE: f32 = 100_000.0;

const HELP: &str =
    "Press and drag over surface to place the selection. Hold shift (fast) or ctrl (slow) to move.";
const ACTIVATE_MESSAGE: &str = "Drag to place. | Shift drag to move fast. | Ctrl drag to move slow.";

/// Places the selected object along the reflection of the view ray.
#[derive(Debug, Default)]
pub struct ReflectionPlacer {
    prefs: PlacementPreferences,
    state: ReflectionState,
}

impl ReflectionPlacer {
    pub fn new(prefs: PlacementPreferences) -> Self {
        Self {
            prefs,
            state: ReflectionState::new(),
        }
    }

    /// Create the placer from stored preferences, writing missing defaults.
    pub fn from_store(store: &mut dyn PreferenceStore) -> Self {
        Self::new(PlacementPreferences::load(store))
    }

    pub fn preferences(&self) -> &PlacementPreferences {
        &self.prefs
    }

    /// Replace the preferences. Takes effect on the next update.
    pub fn set_preferences(&mut self, prefs: PlacementPreferences) -> std::result::Result<(), PreferenceError> {
        prefs.validate()?;
        self.prefs = prefs;
        Ok(())
    }

    pub fn state(&self) -> &ReflectionState {
        &self.state
    }

    pub fn phase(&self) -> PlacerPhase {
        self.state.phase()
    }

    /// Follow the cursor: find the surface, mirror the view ray and keep
    /// the object's current distance from the hit point.
    fn place<H>(&mut self, target: NodeId, point: ScreenPoint, host: &mut H) -> Result<()>
    where
        H: SceneQuery + Viewport + TransformAccess + ?Sized,
    {
        let surface = self.resolve_surface(target, point, &*host)?;

        let ray = host
            .screen_to_world_ray(point)
            .filter(Ray::is_valid)
            .ok_or(ToolError::DegenerateGeometry("invalid view ray"))?;

        let hit = nearest_hit(host.intersect(surface, &ray, MAX_RAY_DISTANCE), MAX_RAY_DISTANCE)
            .ok_or(ToolError::RayMissed)?;
        let normal = host.closest_normal(surface, hit.point).unwrap_or(hit.face_normal);
        let vector = reflection_vector(ray.direction, normal)?;

        let current = host.world_transform(target).ok_or(ToolError::NoTarget)?;
        let distance = current.position.distance(hit.point);

        log::debug!(
            "Reflection on {} at {:?}, vector {:?}, distance {}",
            surface,
            hit.point,
            vector,
            distance
        );
        self.state.place(Reflection { point: hit.point, vector }, distance);
        self.apply(target, host)
    }

    /// Scale the distance along the stored reflection by the horizontal
    /// drag offset.
    fn slide<H>(&mut self, target: NodeId, gesture: &dyn DragGesture, speed: f32, host: &mut H) -> Result<()>
    where
        H: TransformAccess + ?Sized,
    {
        if !self.state.is_armed() {
            return Err(ToolError::NotArmed);
        }

        let offset_x = gesture.drag_point().x - gesture.anchor_point().x;
        let distance = self.state.slide(offset_x, speed);
        log::debug!("Move distance {} ({} speed {})", distance, gesture.modifier(), speed);
        self.apply(target, host)
    }

    /// Surface under the cursor. While the target itself covers the cursor
    /// the surface of the previous hit is reused.
    fn resolve_surface<H>(&mut self, target: NodeId, point: ScreenPoint, host: &H) -> Result<NodeId>
    where
        H: SceneQuery + ?Sized,
    {
        match host.pick_surface(point) {
            Some(node) if node == target => self.state.last_surface.ok_or(ToolError::NoSurface),
            Some(node) => {
                self.state.last_surface = Some(node);
                Ok(node)
            }
            None => Err(ToolError::NoSurface),
        }
    }

    /// Write the placement to the target, limited to the enabled components.
    fn apply<H>(&self, target: NodeId, host: &mut H) -> Result<()>
    where
        H: TransformAccess + ?Sized,
    {
        let reflection = self.state.reflection.ok_or(ToolError::NotArmed)?;

        let translation: Option<Vec3> = self
            .prefs
            .affect_translation
            .then(|| reflection.position_at(self.state.move_distance));
        let rotation: Option<Quat> = if self.prefs.affect_rotation {
            Some(aim_rotation(-reflection.vector, self.prefs.axis, self.prefs.invert_axis)?)
        } else {
            None
        };

        if translation.is_none() && rotation.is_none() {
            log::debug!("Translation and rotation both disabled, nothing to apply");
            return Ok(());
        }

        host.set_world_transform(target, translation, rotation);
        Ok(())
    }
}

/// Log a failed update and turn it into a no-op.
fn report(result: Result<()>) -> ToolResult {
    match result {
        Ok(()) => ToolResult::Handled,
        Err(e) if e.is_transient() => {
            log::debug!("{}", e);
            ToolResult::None
        }
        Err(e) => {
            log::warn!("{}", e);
            ToolResult::None
        }
    }
}

impl<H> DragTool<H> for ReflectionPlacer
where
    H: SceneQuery + Viewport + TransformAccess + StatusChannel + ?Sized,
{
    fn id(&self) -> ToolId {
        PLACE_REFLECTION_TOOL_ID
    }

    fn name(&self) -> &str {
        "Place Reflection"
    }

    fn help(&self) -> Option<&str> {
        Some(HELP)
    }

    fn on_activate(&mut self, host: &mut H) {
        log::info!("Place reflection tool activated");
        host.show_status(ACTIVATE_MESSAGE);
    }

    fn on_deactivate(&mut self, host: &mut H) {
        log::info!("Place reflection tool deactivated");
        self.state.reset();
        host.clear_status();
    }

    fn on_press(&mut self, _gesture: &dyn DragGesture, host: &mut H) -> ToolResult {
        let Some(target) = host.active_selection() else {
            // Drop the target of a gesture whose release never arrived.
            self.state.end_gesture();
            log::warn!("{}", ToolError::NoTarget);
            return ToolResult::None;
        };

        self.state.begin_gesture(target);
        log::debug!("Placing {}, base distance {}", target, self.state.base_distance);
        ToolResult::Handled
    }

    fn on_drag(&mut self, gesture: &dyn DragGesture, host: &mut H) -> ToolResult {
        // Missing selection was already reported at press.
        let Some(target) = self.state.target else {
            return ToolResult::None;
        };

        let result = match self.prefs.speed(gesture.modifier()) {
            None => self.place(target, gesture.drag_point(), host),
            Some(speed) => self.slide(target, gesture, speed, host),
        };
        report(result)
    }

    fn on_release(&mut self, _gesture: &dyn DragGesture, _host: &mut H) -> ToolResult {
        let updated = matches!(self.state.phase(), PlacerPhase::Placing | PlacerPhase::Moving);
        self.state.end_gesture();
        if updated {
            ToolResult::Completed
        } else {
            ToolResult::None
        }
    }
}
