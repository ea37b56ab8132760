//! Glint Placement Tools
//!
//! Interactive drag tools for 3D content-creation hosts.
//!
//! ## Tools
//!
//! - **Place Reflection**: drag over a surface to place the selection where
//!   the view ray bounces to; shift/ctrl drag slides it along the bounce
//! - **Quick Zoom**: drag a region to set the camera 2D pan/zoom, ctrl click
//!   to toggle it, shift drag to pan
//!
//! ## Architecture
//!
//! ```text
//! Host input → ToolRegistry → DragTool → host traits (scene, camera, status)
//! ```
//!
//! The host implements the traits in [`host`] and drives the tools through
//! a [`ToolRegistry`]. Failures never reach the host; they are logged and
//! the update becomes a no-op.

pub mod error;
pub mod framing;
pub mod gesture;
pub mod host;
pub mod preferences;
pub mod reflection;
pub mod tools;

// Re-export commonly used types
pub use error::{PreferenceError, Result, ToolError};

pub use gesture::{DragGesture, Gesture, Modifier, ScreenPoint};

pub use host::{
    CameraAccess,
    CameraSnapshot,
    FilmFit,
    NodeId,
    SceneQuery,
    StatusChannel,
    SurfaceHit,
    TransformAccess,
    Viewport,
};

pub use preferences::{
    AimAxis,
    FilePreferences,
    MemoryPreferences,
    PlacementPreferences,
    PrefValue,
    PreferenceStore,
};

pub use tools::{DragTool, ToolId, ToolRegistry, ToolResult};

pub use reflection::{PlacerPhase, ReflectionPlacer, ReflectionState};

pub use framing::{CameraFrameState, ViewFramer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Toolset name
pub const NAME: &str = "Glint Placement Tools";
