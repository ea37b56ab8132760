//! Drag tool trait and registry.

use std::collections::HashMap;

use crate::gesture::DragGesture;

/// Unique identifier for a tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToolId(pub &'static str);

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of tool operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolResult {
    /// No action taken
    None,
    /// Tool handled the input, continue
    Handled,
    /// Tool completed an action
    Completed,
}

/// A tool driven by press/drag/release gestures.
///
/// `H` is the host type; each tool states the collaborator traits it
/// needs as bounds on its implementation.
pub trait DragTool<H: ?Sized>: Send + Sync {
    /// Unique identifier for this tool.
    fn id(&self) -> ToolId;

    /// Display name.
    fn name(&self) -> &str;

    /// One-line usage hint.
    fn help(&self) -> Option<&str> {
        None
    }

    /// Called when tool becomes active.
    fn on_activate(&mut self, _host: &mut H) {}

    /// Called when tool becomes inactive. May arrive in the middle of a
    /// gesture or before any gesture happened.
    fn on_deactivate(&mut self, _host: &mut H) {}

    /// Mouse button pressed.
    fn on_press(&mut self, _gesture: &dyn DragGesture, _host: &mut H) -> ToolResult {
        ToolResult::None
    }

    /// Pointer moved with the button held.
    fn on_drag(&mut self, _gesture: &dyn DragGesture, _host: &mut H) -> ToolResult {
        ToolResult::None
    }

    /// Mouse button released.
    fn on_release(&mut self, _gesture: &dyn DragGesture, _host: &mut H) -> ToolResult {
        ToolResult::None
    }
}

/// Registry for managing tools and routing gestures to the active one.
pub struct ToolRegistry<H: ?Sized> {
    tools: HashMap<ToolId, Box<dyn DragTool<H>>>,
    active_tool: Option<ToolId>,
    previous_tool: Option<ToolId>,
    gesture_active: bool,
}

impl<H: ?Sized> Default for ToolRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ?Sized> ToolRegistry<H> {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            active_tool: None,
            previous_tool: None,
            gesture_active: false,
        }
    }

    /// Register a tool. Registering replaces a tool with the same id.
    pub fn register(&mut self, tool: Box<dyn DragTool<H>>) {
        let id = tool.id();
        if self.tools.insert(id, tool).is_some() {
            log::warn!("Replaced tool '{}'", id);
        }
    }

    /// Get the active tool.
    pub fn active(&self) -> Option<&dyn DragTool<H>> {
        self.active_tool.and_then(|id| self.tools.get(&id).map(|t| t.as_ref()))
    }

    /// Get the active tool ID.
    pub fn active_id(&self) -> Option<ToolId> {
        self.active_tool
    }

    /// True between a press and its release.
    pub fn gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// Switch to a tool by ID. Unknown ids leave the current tool active.
    pub fn switch_to(&mut self, id: ToolId, host: &mut H) -> bool {
        if !self.tools.contains_key(&id) {
            log::warn!("Unknown tool '{}'", id);
            return false;
        }

        self.deactivate(host);

        self.active_tool = Some(id);
        if let Some(tool) = self.tools.get_mut(&id) {
            log::info!("Activated tool '{}'", tool.name());
            tool.on_activate(host);
        }
        true
    }

    /// Switch to previous tool.
    pub fn switch_to_previous(&mut self, host: &mut H) -> bool {
        match self.previous_tool {
            Some(prev) => self.switch_to(prev, host),
            None => false,
        }
    }

    /// Deactivate the current tool, aborting any gesture in flight.
    pub fn deactivate(&mut self, host: &mut H) {
        if let Some(current_id) = self.active_tool.take() {
            if let Some(tool) = self.tools.get_mut(&current_id) {
                if self.gesture_active {
                    log::debug!("Aborting gesture of '{}'", current_id);
                }
                tool.on_deactivate(host);
            }
            self.previous_tool = Some(current_id);
        }
        self.gesture_active = false;
    }

    /// Forward a press to the active tool.
    pub fn press(&mut self, gesture: &dyn DragGesture, host: &mut H) -> ToolResult {
        let Some(tool) = self.active_tool.and_then(|id| self.tools.get_mut(&id)) else {
            return ToolResult::None;
        };
        self.gesture_active = true;
        tool.on_press(gesture, host)
    }

    /// Forward a drag to the active tool. Drags without a press are dropped.
    pub fn drag(&mut self, gesture: &dyn DragGesture, host: &mut H) -> ToolResult {
        if !self.gesture_active {
            log::debug!("Ignoring drag without press");
            return ToolResult::None;
        }
        match self.active_tool.and_then(|id| self.tools.get_mut(&id)) {
            Some(tool) => tool.on_drag(gesture, host),
            None => ToolResult::None,
        }
    }

    /// Forward a release to the active tool and end the gesture.
    pub fn release(&mut self, gesture: &dyn DragGesture, host: &mut H) -> ToolResult {
        if !std::mem::replace(&mut self.gesture_active, false) {
            log::debug!("Ignoring release without press");
            return ToolResult::None;
        }
        match self.active_tool.and_then(|id| self.tools.get_mut(&id)) {
            Some(tool) => tool.on_release(gesture, host),
            None => ToolResult::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{Gesture, Modifier, ScreenPoint};

    #[derive(Default)]
    struct Log {
        events: Vec<String>,
    }

    struct Recorder(ToolId);

    impl DragTool<Log> for Recorder {
        fn id(&self) -> ToolId {
            self.0
        }

        fn name(&self) -> &str {
            self.0 .0
        }

        fn on_activate(&mut self, host: &mut Log) {
            host.events.push(format!("{}:activate", self.0));
        }

        fn on_deactivate(&mut self, host: &mut Log) {
            host.events.push(format!("{}:deactivate", self.0));
        }

        fn on_press(&mut self, _gesture: &dyn DragGesture, host: &mut Log) -> ToolResult {
            host.events.push(format!("{}:press", self.0));
            ToolResult::Handled
        }

        fn on_drag(&mut self, _gesture: &dyn DragGesture, host: &mut Log) -> ToolResult {
            host.events.push(format!("{}:drag", self.0));
            ToolResult::Handled
        }

        fn on_release(&mut self, _gesture: &dyn DragGesture, host: &mut Log) -> ToolResult {
            host.events.push(format!("{}:release", self.0));
            ToolResult::Completed
        }
    }

    const A: ToolId = ToolId("a");
    const B: ToolId = ToolId("b");

    fn registry() -> ToolRegistry<Log> {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(Recorder(A)));
        registry.register(Box::new(Recorder(B)));
        registry
    }

    #[test]
    fn test_switch_runs_lifecycle_hooks() {
        let mut log = Log::default();
        let mut registry = registry();

        assert!(registry.switch_to(A, &mut log));
        assert!(registry.switch_to(B, &mut log));
        assert!(registry.switch_to_previous(&mut log));

        assert_eq!(
            log.events,
            ["a:activate", "a:deactivate", "b:activate", "b:deactivate", "a:activate"]
        );
        assert_eq!(registry.active_id(), Some(A));
    }

    #[test]
    fn test_unknown_tool_keeps_active() {
        let mut log = Log::default();
        let mut registry = registry();
        registry.switch_to(A, &mut log);

        assert!(!registry.switch_to(ToolId("missing"), &mut log));
        assert_eq!(registry.active_id(), Some(A));
    }

    #[test]
    fn test_gesture_routing_requires_press() {
        let mut log = Log::default();
        let mut registry = registry();
        registry.switch_to(A, &mut log);
        let gesture = Gesture::press(ScreenPoint::new(10.0, 10.0), Modifier::None);

        assert_eq!(registry.drag(&gesture, &mut log), ToolResult::None);
        assert_eq!(registry.release(&gesture, &mut log), ToolResult::None);

        assert_eq!(registry.press(&gesture, &mut log), ToolResult::Handled);
        assert!(registry.gesture_active());
        assert_eq!(registry.drag(&gesture, &mut log), ToolResult::Handled);
        assert_eq!(registry.release(&gesture, &mut log), ToolResult::Completed);
        assert!(!registry.gesture_active());

        assert_eq!(log.events, ["a:activate", "a:press", "a:drag", "a:release"]);
    }

    #[test]
    fn test_switch_aborts_gesture() {
        let mut log = Log::default();
        let mut registry = registry();
        registry.switch_to(A, &mut log);
        let gesture = Gesture::press(ScreenPoint::new(0.0, 0.0), Modifier::None);

        registry.press(&gesture, &mut log);
        registry.switch_to(B, &mut log);
        assert!(!registry.gesture_active());
        assert_eq!(registry.drag(&gesture, &mut log), ToolResult::None);
    }
}
