//! Screen region to camera pan/zoom mapping.
//!
//! Pan values are in inches of film aperture, zoom is the fraction of the
//! film gate left visible. Screen points are Y-up viewport pixels.

use glint_math::Vec2;

use crate::error::{Result, ToolError};
use crate::gesture::ScreenPoint;
use crate::host::FilmFit;

/// Film inches panned per screen pixel at zoom 1.
pub const PAN_SCALE: f32 = 0.00081;

/// Smallest zoom written to the camera.
pub const MIN_ZOOM: f32 = 0.01;

/// Which viewport dimension the film gate spans completely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitAxis {
    /// Gate fills the width, bars at top and bottom
    Horizontal,
    /// Gate fills the height, bars left and right
    Vertical,
}

/// Fit axis for a film fit mode and viewport.
///
/// Only an explicit vertical fit, or a fill fit in a viewport narrower
/// than the camera, fits vertically.
pub fn fit_axis(film_fit: FilmFit, port_width: f32, port_height: f32, camera_aspect: f32) -> FitAxis {
    match film_fit {
        FilmFit::Vertical => FitAxis::Vertical,
        FilmFit::Fill if port_width / port_height < camera_aspect => FitAxis::Vertical,
        _ => FitAxis::Horizontal,
    }
}

/// Viewport and camera values the framing depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    pub port_width: f32,
    pub port_height: f32,
    pub aspect_ratio: f32,
    pub overscan: f32,
    pub horizontal_aperture: f32,
    pub vertical_aperture: f32,
    pub film_fit: FilmFit,
}

impl FrameParams {
    /// Port size and aspect must be positive for the mapping to exist.
    pub fn validate(&self) -> Result<()> {
        validate_viewport(self.port_width, self.port_height, self.aspect_ratio)
    }

    pub fn fit_axis(&self) -> FitAxis {
        fit_axis(self.film_fit, self.port_width, self.port_height, self.aspect_ratio)
    }

    /// Width and height of the film gate inside the viewport.
    pub fn gate_size(&self) -> Vec2 {
        match self.fit_axis() {
            FitAxis::Horizontal => Vec2::new(self.port_width, self.port_width / self.aspect_ratio),
            FitAxis::Vertical => Vec2::new(self.port_height * self.aspect_ratio, self.port_height),
        }
    }
}

pub(crate) fn validate_viewport(width: f32, height: f32, aspect: f32) -> Result<()> {
    let positive = |v: f32| v.is_finite() && v > 0.0;
    if positive(width) && positive(height) && positive(aspect) {
        Ok(())
    } else {
        Err(ToolError::InvalidViewport { width, height, aspect })
    }
}

/// Camera 2D pan and zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoom {
    pub horizontal_pan: f32,
    pub vertical_pan: f32,
    pub zoom: f32,
}

/// Pan and zoom that fill the view with the region between `start` and
/// `end`. The drag may go in any direction; an empty region gives
/// [`MIN_ZOOM`].
pub fn frame_region(params: &FrameParams, start: ScreenPoint, end: ScreenPoint) -> PanZoom {
    let axis = params.fit_axis();
    let gate = params.gate_size();

    let mut center = start.midpoint(end);
    match axis {
        FitAxis::Horizontal => center.y -= (params.port_height - gate.y) / 2.0,
        FitAxis::Vertical => center.x -= (params.port_width - gate.x) / 2.0,
    }

    let delta = center - gate * 0.5;
    let offset_x = delta.x / gate.x * params.overscan;
    let offset_y = delta.y / gate.y * params.overscan;

    let extent = match axis {
        FitAxis::Horizontal => (end.x - start.x).abs() / params.port_width,
        FitAxis::Vertical => (end.y - start.y).abs() / params.port_height,
    };
    let mut zoom = extent * params.overscan;
    if zoom.is_nan() || zoom <= 0.0 {
        zoom = MIN_ZOOM;
    }

    PanZoom {
        horizontal_pan: params.horizontal_aperture * offset_x,
        vertical_pan: params.vertical_aperture * offset_y,
        zoom,
    }
}

/// Pan after dragging from `anchor` to `current`, starting from
/// `start_pan`. The view follows the cursor, so the pan moves opposite
/// to the drag, scaled by the live zoom.
pub fn pan_from_drag(start_pan: Vec2, anchor: ScreenPoint, current: ScreenPoint, zoom: f32) -> Vec2 {
    start_pan + (anchor - current) * (PAN_SCALE * zoom)
}
