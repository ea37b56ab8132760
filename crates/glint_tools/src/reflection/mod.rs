//! Reflection placement.
//!
//! Positions and orients an object so that the view ray bouncing off the
//! surface under the cursor points at it: the usual way to aim a light at
//! a highlight.

mod geometry;
mod placer;
mod state;

pub use geometry::{aim_frame, aim_rotation, nearest_hit, reflection_vector, AimFrame, FALLBACK_UP, WORLD_UP};
pub use placer::{ReflectionPlacer, MAX_RAY_DISTANCE, PLACE_REFLECTION_TOOL_ID};
pub use state::{PlacerPhase, Reflection, ReflectionState};
