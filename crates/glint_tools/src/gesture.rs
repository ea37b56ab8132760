//! Drag gestures delivered by the host.
//!
//! A gesture is one press, zero or more drags and a release. Points are
//! in viewport pixels with the origin at the bottom-left corner and Y
//! growing upwards.

use glint_math::Vec2;

/// A point in viewport pixel space
pub type ScreenPoint = Vec2;

/// Modifier key held during a gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Modifier {
    #[default]
    None,
    Shift,
    Ctrl,
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Modifier::None => "none",
            Modifier::Shift => "shift",
            Modifier::Ctrl => "ctrl",
        };
        f.write_str(name)
    }
}

/// Read access to the gesture in progress.
pub trait DragGesture {
    /// Screen point where the button was pressed.
    fn anchor_point(&self) -> ScreenPoint;

    /// Current (or final, at release) screen point.
    fn drag_point(&self) -> ScreenPoint;

    /// Modifier key held right now.
    fn modifier(&self) -> Modifier;
}

/// Plain gesture snapshot for hosts that poll their input state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gesture {
    pub anchor: ScreenPoint,
    pub current: ScreenPoint,
    pub modifier: Modifier,
}

impl Gesture {
    /// A gesture that has just been pressed at `anchor`.
    pub fn press(anchor: ScreenPoint, modifier: Modifier) -> Self {
        Self {
            anchor,
            current: anchor,
            modifier,
        }
    }

    /// Same gesture moved to `current`.
    pub fn moved_to(self, current: ScreenPoint) -> Self {
        Self { current, ..self }
    }

    /// Same gesture with a different modifier held.
    pub fn with_modifier(self, modifier: Modifier) -> Self {
        Self { modifier, ..self }
    }
}

impl DragGesture for Gesture {
    fn anchor_point(&self) -> ScreenPoint {
        self.anchor
    }

    fn drag_point(&self) -> ScreenPoint {
        self.current
    }

    fn modifier(&self) -> Modifier {
        self.modifier
    }
}
