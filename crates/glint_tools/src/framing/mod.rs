//! Quick zoom: frame a dragged screen region with the camera 2D pan/zoom.

mod framer;
mod region;
mod state;

pub use framer::{ViewFramer, QUICK_ZOOM_TOOL_ID, RESET_MESSAGE, ZOOM_MESSAGE};
pub use region::{fit_axis, frame_region, pan_from_drag, FitAxis, FrameParams, PanZoom, MIN_ZOOM, PAN_SCALE};
pub use state::{CameraFrameState, FramingMode};
