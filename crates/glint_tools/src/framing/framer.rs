//! Quick zoom tool.

use crate::error::{Result, ToolError};
use crate::gesture::{DragGesture, Modifier};
use crate::host::{CameraAccess, CameraSnapshot, StatusChannel, Viewport};
use crate::tools::{DragTool, ToolId, ToolResult};

use super::region::{frame_region, pan_from_drag, validate_viewport, FrameParams};
use super::state::{CameraFrameState, FramingMode};

pub const QUICK_ZOOM_TOOL_ID: ToolId = ToolId("quick_zoom");

/// Shown while the camera is unzoomed.
pub const ZOOM_MESSAGE: &str = "Drag a region to zoom/pan into.";
/// Shown while pan/zoom is enabled.
pub const RESET_MESSAGE: &str = "Ctrl click to reset.  |  Shift drag to pan.";

const HELP: &str = "Drag a region to zoom/pan into the current view.";

/// Sets the 2D pan/zoom of the active camera from a dragged region.
///
/// A plain drag frames the region on release, a ctrl click toggles
/// pan/zoom and a shift drag pans the zoomed view.
#[derive(Debug, Default)]
pub struct ViewFramer {
    state: CameraFrameState,
}

impl ViewFramer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CameraFrameState {
        &self.state
    }

    /// Flip pan/zoom on the active camera. Returns the new state.
    pub fn toggle_pan_zoom<H>(&mut self, host: &mut H) -> Result<bool>
    where
        H: CameraAccess + StatusChannel + ?Sized,
    {
        let camera = host.active_camera().ok_or(ToolError::NoCamera)?;
        Ok(self.toggle(&camera, host))
    }

    fn toggle<H>(&mut self, camera: &CameraSnapshot, host: &mut H) -> bool
    where
        H: CameraAccess + StatusChannel + ?Sized,
    {
        let enabled = !camera.pan_zoom_enabled;
        host.set_pan_zoom_enabled(enabled);
        self.state.pan_zoom_enabled = enabled;

        if enabled {
            host.show_status(RESET_MESSAGE);
            log::info!("Activated pan/zoom for camera {}", camera.name);
        } else {
            host.show_status(ZOOM_MESSAGE);
            log::info!("Deactivated pan/zoom for camera {}", camera.name);
        }
        enabled
    }

    fn begin<H>(&mut self, modifier: Modifier, host: &mut H) -> Result<ToolResult>
    where
        H: CameraAccess + Viewport + StatusChannel + ?Sized,
    {
        let camera = host.active_camera().ok_or(ToolError::NoCamera)?;
        if camera.orthographic {
            return Err(ToolError::NotPerspective);
        }

        if modifier == Modifier::Ctrl {
            self.toggle(&camera, host);
            self.state.mode = FramingMode::Toggled;
            return Ok(ToolResult::Completed);
        }

        let (width, height) = (host.port_width(), host.port_height());
        validate_viewport(width, height, camera.aspect_ratio)?;
        self.state.capture(&camera, width, height);
        log::debug!(
            "Framing {} in {}x{} viewport, pan ({}, {})",
            camera.name,
            width,
            height,
            camera.horizontal_pan,
            camera.vertical_pan
        );
        Ok(ToolResult::Handled)
    }

    /// Shift drag: move the pan with the cursor, using the live zoom.
    fn pan<H>(&mut self, gesture: &dyn DragGesture, host: &mut H) -> Result<ToolResult>
    where
        H: CameraAccess + ?Sized,
    {
        let camera = host.active_camera().ok_or(ToolError::NoCamera)?;
        self.state.pan_zoom_enabled = camera.pan_zoom_enabled;
        if !camera.pan_zoom_enabled {
            log::debug!("Pan/zoom disabled on {}, not panning", camera.name);
            return Ok(ToolResult::None);
        }

        let pan = pan_from_drag(
            self.state.start_pan(),
            gesture.anchor_point(),
            gesture.drag_point(),
            camera.zoom,
        );
        if !(pan.x.is_finite() && pan.y.is_finite()) {
            return Err(ToolError::DegenerateGeometry("non-finite pan"));
        }
        host.set_pan(pan.x, pan.y);
        Ok(ToolResult::Handled)
    }

    /// Plain release: fit the dragged region into the view.
    fn frame<H>(&mut self, gesture: &dyn DragGesture, host: &mut H) -> Result<ToolResult>
    where
        H: CameraAccess + StatusChannel + ?Sized,
    {
        let camera = host.active_camera().ok_or(ToolError::NoCamera)?;
        let params = FrameParams {
            port_width: self.state.port_width,
            port_height: self.state.port_height,
            aspect_ratio: self.state.aspect_ratio,
            overscan: camera.overscan,
            horizontal_aperture: camera.horizontal_aperture,
            vertical_aperture: camera.vertical_aperture,
            film_fit: camera.film_fit,
        };
        params.validate()?;

        let framed = frame_region(&params, gesture.anchor_point(), gesture.drag_point());
        if !(framed.horizontal_pan.is_finite() && framed.vertical_pan.is_finite() && framed.zoom.is_finite()) {
            return Err(ToolError::DegenerateGeometry("non-finite pan/zoom"));
        }
        host.set_pan_zoom_enabled(true);
        host.set_pan(framed.horizontal_pan, framed.vertical_pan);
        host.set_zoom(framed.zoom);
        self.state.pan_zoom_enabled = true;

        log::info!(
            "Framed {}: pan ({}, {}), zoom {}",
            camera.name,
            framed.horizontal_pan,
            framed.vertical_pan,
            framed.zoom
        );
        host.show_status(RESET_MESSAGE);
        Ok(ToolResult::Completed)
    }
}

/// Log a failed update and turn it into a no-op.
fn report(result: Result<ToolResult>) -> ToolResult {
    result.unwrap_or_else(|e| {
        log::warn!("{}", e);
        ToolResult::None
    })
}

impl<H> DragTool<H> for ViewFramer
where
    H: CameraAccess + Viewport + StatusChannel + ?Sized,
{
    fn id(&self) -> ToolId {
        QUICK_ZOOM_TOOL_ID
    }

    fn name(&self) -> &str {
        "Quick Zoom"
    }

    fn help(&self) -> Option<&str> {
        Some(HELP)
    }

    fn on_activate(&mut self, host: &mut H) {
        log::info!("Quick zoom tool activated");
        host.show_status(ZOOM_MESSAGE);
    }

    fn on_deactivate(&mut self, host: &mut H) {
        self.state.reset();
        host.clear_status();
        log::info!("Reset quick zoom tool");
    }

    fn on_press(&mut self, gesture: &dyn DragGesture, host: &mut H) -> ToolResult {
        self.state.mode = FramingMode::Inactive;
        report(self.begin(gesture.modifier(), host))
    }

    fn on_drag(&mut self, gesture: &dyn DragGesture, host: &mut H) -> ToolResult {
        if self.state.mode != FramingMode::Framing {
            return ToolResult::None;
        }
        match gesture.modifier() {
            Modifier::Shift => report(self.pan(gesture, host)),
            _ => ToolResult::Handled,
        }
    }

    fn on_release(&mut self, gesture: &dyn DragGesture, host: &mut H) -> ToolResult {
        if self.state.finish() != FramingMode::Framing {
            return ToolResult::None;
        }
        match gesture.modifier() {
            Modifier::None => report(self.frame(gesture, host)),
            _ => ToolResult::None,
        }
    }
}
