//! Error types for the drag tools
//!
//! None of these reach the host: tool callbacks log them and turn the
//! current update into a no-op.

use thiserror::Error;

/// Reasons a tool update did not change anything
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// Nothing is selected to place
    #[error("No object selected to place")]
    NoTarget,

    /// The cursor is not over a surface
    #[error("No surface under the cursor")]
    NoSurface,

    /// The view ray does not hit the surface under the cursor
    #[error("View ray does not intersect the surface")]
    RayMissed,

    /// Move mode requested before anything was placed
    #[error("Nothing placed yet, move mode has no reflection to follow")]
    NotArmed,

    /// The host has no active camera
    #[error("No active camera")]
    NoCamera,

    /// Framing only works for perspective cameras
    #[error("Quick zoom only works in a perspective view")]
    NotPerspective,

    /// Viewport or camera dimensions unusable for framing
    #[error("Invalid viewport: {width}x{height}, camera aspect {aspect}")]
    InvalidViewport { width: f32, height: f32, aspect: f32 },

    /// Geometry collapsed to a zero or non-finite value
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}

impl ToolError {
    /// Missing user input is expected while dragging and only worth a
    /// debug line; everything else is a warning.
    pub fn is_transient(&self) -> bool {
        matches!(self, ToolError::NoSurface | ToolError::RayMissed)
    }
}

/// Result type for tool operations
pub type Result<T> = std::result::Result<T, ToolError>;

/// Preference store errors
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Reading or writing the preference file failed
    #[error("Preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The preference file is not valid TOML
    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] toml::de::Error),

    /// The preferences could not be serialized
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A stored value has the wrong type or is out of range
    #[error("Invalid value for preference '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}
