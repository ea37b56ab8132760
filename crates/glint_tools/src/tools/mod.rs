//! Drag tools for viewport interaction.
//!
//! Tools receive press/drag/release gestures from the host and change
//! object transforms or camera settings in response.

mod tool;

pub use tool::{DragTool, ToolId, ToolRegistry, ToolResult};
