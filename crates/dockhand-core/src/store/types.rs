//! Core types for the panel descriptor store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use dockhand_common::{PanelId, Placement, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Canonical state record for a single panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    pub id: PanelId,
    pub title: String,
    pub placement: Placement,
    /// Owning dock. Kept while floating so the panel knows where to return.
    pub dock_id: String,
    /// Only meaningful while floating.
    pub position: Option<Point>,
    /// Only meaningful while floating.
    pub size: Option<Size>,
    pub z_index: Option<i32>,
    pub visible: bool,
    pub mounted: bool,
    /// Stack position within the dock.
    pub order: u32,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl PanelDescriptor {
    pub fn is_floating(&self) -> bool {
        self.placement == Placement::Floating
    }

    /// Floating bounds, when both position and size are known.
    pub fn bounds(&self) -> Option<Rect> {
        match (self.position, self.size) {
            (Some(p), Some(s)) => Some(Rect::from_parts(p, s)),
            _ => None,
        }
    }
}

/// Initial values for `create_descriptor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorDefaults {
    /// Defaults to the panel id.
    pub title: Option<String>,
    /// DOCKED or HIDDEN; a panel only floats through the coordinator.
    pub placement: Placement,
    pub visible: bool,
    /// Defaults to the end of the dock's stack.
    pub order: Option<u32>,
}

impl Default for DescriptorDefaults {
    fn default() -> Self {
        Self {
            title: None,
            placement: Placement::Docked,
            visible: true,
            order: None,
        }
    }
}

impl DescriptorDefaults {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn hidden(mut self) -> Self {
        self.placement = Placement::Hidden;
        self.visible = false;
        self
    }
}

/// Partial update merged into a descriptor by `update_descriptor`.
///
/// `None` leaves a field untouched; the nested `Option` of the geometry
/// fields distinguishes "clear" (`Some(None)`) from "keep" (`None`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptorPatch {
    pub title: Option<String>,
    pub placement: Option<Placement>,
    pub dock_id: Option<String>,
    pub position: Option<Option<Point>>,
    pub size: Option<Option<Size>>,
    pub z_index: Option<Option<i32>>,
    pub visible: Option<bool>,
    pub mounted: Option<bool>,
    pub order: Option<u32>,
}

impl DescriptorPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn dock_id(mut self, dock_id: impl Into<String>) -> Self {
        self.dock_id = Some(dock_id.into());
        self
    }

    pub fn position(mut self, position: Option<Point>) -> Self {
        self.position = Some(position);
        self
    }

    pub fn size(mut self, size: Option<Size>) -> Self {
        self.size = Some(size);
        self
    }

    pub fn z_index(mut self, z_index: Option<i32>) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn mounted(mut self, mounted: bool) -> Self {
        self.mounted = Some(mounted);
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Selection criteria for `list`. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptorFilter {
    pub placement: Option<Placement>,
    pub dock_id: Option<String>,
    pub visible: Option<bool>,
}

impl DescriptorFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn placement(placement: Placement) -> Self {
        Self {
            placement: Some(placement),
            ..Self::default()
        }
    }

    pub fn in_dock(dock_id: impl Into<String>) -> Self {
        Self {
            dock_id: Some(dock_id.into()),
            ..Self::default()
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn matches(&self, d: &PanelDescriptor) -> bool {
        self.placement.map_or(true, |p| d.placement == p)
            && self.dock_id.as_deref().map_or(true, |dock| d.dock_id == dock)
            && self.visible.map_or(true, |v| d.visible == v)
    }
}

/// Notification delivered synchronously to subscribers after a mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Created(PanelDescriptor),
    Updated(PanelDescriptor),
    Removed(PanelId),
    /// Contents were replaced wholesale by an import.
    Reset,
}

impl StoreEvent {
    pub fn panel_id(&self) -> Option<&PanelId> {
        match self {
            StoreEvent::Created(d) | StoreEvent::Updated(d) => Some(&d.id),
            StoreEvent::Removed(id) => Some(id),
            StoreEvent::Reset => None,
        }
    }
}

/// Create/update/remove contract expressed as data, for hosts that route
/// changes through a dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    Create {
        id: PanelId,
        dock_id: String,
        defaults: DescriptorDefaults,
    },
    Update {
        id: PanelId,
        patch: DescriptorPatch,
    },
    Remove(PanelId),
}

/// Serialized store export handed to persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub panels: Vec<PanelDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

pub type Subscriber = Box<dyn FnMut(&StoreEvent)>;

/// Single source of truth for panel placement and geometry.
///
/// Descriptors are only handed out by shared reference; every mutation goes
/// through the store so each one produces exactly one `StoreEvent`.
pub struct DescriptorStore {
    pub(super) descriptors: BTreeMap<PanelId, PanelDescriptor>,
    pub(super) subscribers: Vec<(SubscriptionId, Subscriber)>,
    pub(super) next_subscription: u64,
}

impl DescriptorStore {
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    // -- Accessors --

    pub fn get_descriptor(&self, id: &PanelId) -> Option<&PanelDescriptor> {
        self.descriptors.get(id)
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.descriptors.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for DescriptorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DescriptorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptorStore")
            .field("descriptors", &self.descriptors)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
