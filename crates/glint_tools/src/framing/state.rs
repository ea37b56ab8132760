//! View framer state.

use glint_math::Vec2;

use crate::host::CameraSnapshot;

/// What the current gesture does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FramingMode {
    /// No gesture, or a gesture that was rejected at press
    #[default]
    Inactive,
    /// Ctrl click that toggled pan/zoom; the rest of the gesture is ignored
    Toggled,
    /// Region drag, or shift pan while pan/zoom is enabled
    Framing,
}

/// Camera and viewport values captured at press.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CameraFrameState {
    pub aspect_ratio: f32,
    pub horizontal_pan: f32,
    pub vertical_pan: f32,
    pub port_width: f32,
    pub port_height: f32,
    /// Pan/zoom state of the camera, updated by toggles
    pub pan_zoom_enabled: bool,
    pub mode: FramingMode,
}

impl CameraFrameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache the camera and viewport for a framing gesture.
    pub fn capture(&mut self, camera: &CameraSnapshot, port_width: f32, port_height: f32) {
        self.aspect_ratio = camera.aspect_ratio;
        self.horizontal_pan = camera.horizontal_pan;
        self.vertical_pan = camera.vertical_pan;
        self.port_width = port_width;
        self.port_height = port_height;
        self.pan_zoom_enabled = camera.pan_zoom_enabled;
        self.mode = FramingMode::Framing;
    }

    /// Pan the gesture started from.
    #[inline]
    pub fn start_pan(&self) -> Vec2 {
        Vec2::new(self.horizontal_pan, self.vertical_pan)
    }

    /// End the gesture, returning its mode.
    pub fn finish(&mut self) -> FramingMode {
        std::mem::take(&mut self.mode)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
