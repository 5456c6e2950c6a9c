//! Session and listener types for pointer-driven drag and resize.

use dockhand_common::{PanelId, Point, SessionId, Size};
use dockhand_config::schema::FlyoutConfig;
use serde::Serialize;

/// A pointer sample in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointerEvent {
    pub position: Point,
    /// Distinguishes concurrent pointers; moves from other ids are ignored.
    pub pointer_id: u32,
}

impl PointerEvent {
    pub fn new(position: Point, pointer_id: u32) -> Self {
        Self {
            position,
            pointer_id,
        }
    }

    /// Primary-pointer event at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragSession {
    pub id: SessionId,
    pub panel: PanelId,
    pub pointer_id: u32,
    /// Pointer position at session start.
    pub origin: Point,
    pub start_position: Point,
    pub last_position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResizeSession {
    pub id: SessionId,
    pub panel: PanelId,
    pub pointer_id: u32,
    pub origin: Point,
    pub start_size: Size,
    pub last_size: Size,
}

/// The one gesture a controller may be tracking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActiveSession {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl ActiveSession {
    pub fn id(&self) -> &SessionId {
        match self {
            ActiveSession::Drag(s) => &s.id,
            ActiveSession::Resize(s) => &s.id,
        }
    }

    pub fn panel(&self) -> &PanelId {
        match self {
            ActiveSession::Drag(s) => &s.panel,
            ActiveSession::Resize(s) => &s.panel,
        }
    }

    pub fn pointer_id(&self) -> u32 {
        match self {
            ActiveSession::Drag(s) => s.pointer_id,
            ActiveSession::Resize(s) => s.pointer_id,
        }
    }

    pub fn kind(&self) -> SessionKind {
        match self {
            ActiveSession::Drag(_) => SessionKind::Drag,
            ActiveSession::Resize(_) => SessionKind::Resize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Drag,
    Resize,
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionKind::Drag => write!(f, "drag"),
            SessionKind::Resize => write!(f, "resize"),
        }
    }
}

/// Whether the global move/up listeners are installed, and how often they
/// were attached and detached over the controller's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointerListeners {
    pub installed: bool,
    pub attach_count: u32,
    pub detach_count: u32,
}

impl PointerListeners {
    pub(super) fn attach(&mut self) {
        if !self.installed {
            self.installed = true;
            self.attach_count += 1;
        }
    }

    pub(super) fn detach(&mut self) {
        if self.installed {
            self.installed = false;
            self.detach_count += 1;
        }
    }
}

/// Geometry committed to the store by a pointer event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometryUpdate {
    Moved { panel: PanelId, position: Point },
    Resized { panel: PanelId, size: Size },
}

impl GeometryUpdate {
    pub fn panel(&self) -> &PanelId {
        match self {
            GeometryUpdate::Moved { panel, .. } | GeometryUpdate::Resized { panel, .. } => panel,
        }
    }
}

/// Tracks at most one drag or resize session and streams its geometry into
/// the descriptor store.
#[derive(Debug)]
pub struct InteractionController {
    pub(super) slot: Option<ActiveSession>,
    pub(super) listeners: PointerListeners,
    pub(super) min_size: Size,
}

impl InteractionController {
    pub fn new(min_size: Size) -> Self {
        Self {
            slot: None,
            listeners: PointerListeners::default(),
            min_size,
        }
    }

    pub fn from_config(config: &FlyoutConfig) -> Self {
        Self::new(Size::new(config.min_width, config.min_height))
    }

    // -- Accessors --

    pub fn active_session(&self) -> Option<&ActiveSession> {
        self.slot.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.slot.is_none()
    }

    pub fn listeners(&self) -> PointerListeners {
        self.listeners
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::from_config(&FlyoutConfig::default())
    }
}
