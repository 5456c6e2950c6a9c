//! Core types for layered z-index allocation.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use dockhand_config::schema::ZIndexConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Smallest counter step `bring_to_front` will use.
pub const MIN_FRONT_GAP: u32 = 10;

/// One of four disjoint numeric ranges bucketing stacking order by semantic
/// class. Each layer owns an independent counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Layer {
    Base,
    Ui,
    Popup,
    System,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Base, Layer::Ui, Layer::Popup, Layer::System];

    pub const fn min(self) -> i32 {
        match self {
            Layer::Base => 0,
            Layer::Ui => 100,
            Layer::Popup => 1000,
            Layer::System => 10_000,
        }
    }

    pub const fn max(self) -> i32 {
        match self {
            Layer::Base => 99,
            Layer::Ui => 999,
            Layer::Popup => 9999,
            Layer::System => 99_999,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Layer::Base => "BASE",
            Layer::Ui => "UI",
            Layer::Popup => "POPUP",
            Layer::System => "SYSTEM",
        }
    }

    /// Resolve a layer by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Layer> {
        Layer::ALL
            .into_iter()
            .find(|layer| layer.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn contains(self, z: i32) -> bool {
        (self.min()..=self.max()).contains(&z)
    }

    pub(super) const fn index(self) -> usize {
        match self {
            Layer::Base => 0,
            Layer::Ui => 1,
            Layer::Popup => 2,
            Layer::System => 3,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of any overlay whose stacking order the allocator manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandleId(pub u64);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay-{}", self.0)
    }
}

/// An overlay that carries a stacking value the allocator can write.
///
/// `z_index()` before registration is the element's native value; it is
/// captured on register and written back on unregister.
pub trait Stackable {
    fn handle_id(&self) -> HandleId;
    fn z_index(&self) -> Option<i32>;
    fn set_z_index(&mut self, z_index: Option<i32>);
}

/// Per-registration options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterOptions {
    /// The overlay forms its own stacking context. Set by whoever creates the
    /// overlay; the allocator never infers it.
    pub isolated: bool,
    /// Free-form label shown by inspection tooling.
    pub label: Option<String>,
}

impl RegisterOptions {
    pub fn isolated() -> Self {
        Self {
            isolated: true,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Bookkeeping for one registered overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub handle: HandleId,
    pub layer: Layer,
    pub priority: u32,
    pub z_index: i32,
    pub registered_at: DateTime<Utc>,
    pub promotion_count: u32,
    pub prior_z_index: Option<i32>,
    pub isolated: bool,
    pub label: Option<String>,
}

/// Assigns stacking values inside the four layers.
///
/// Callers never write z-index values themselves; every value comes from
/// `register*` or `bring_to_front`, which keeps each layer counter monotonic.
#[derive(Debug)]
pub struct ZIndexAllocator {
    pub(super) registrations: HashMap<HandleId, Registration>,
    /// Highest value handed out per layer, seeded at the layer minimum.
    pub(super) counters: [i32; 4],
    pub(super) front_gap: u32,
    pub(super) warn_on_clamp: bool,
    pub(super) next_handle: u64,
}

impl ZIndexAllocator {
    pub fn new() -> Self {
        Self {
            registrations: HashMap::new(),
            counters: Layer::ALL.map(Layer::min),
            front_gap: MIN_FRONT_GAP,
            warn_on_clamp: true,
            next_handle: 1,
        }
    }

    pub fn from_config(config: &ZIndexConfig) -> Self {
        let mut allocator = Self::new();
        allocator.set_front_gap(config.front_gap);
        allocator.warn_on_clamp = config.warn_on_clamp;
        allocator
    }

    /// Update the bring-to-front step. Values below `MIN_FRONT_GAP` are raised.
    pub fn set_front_gap(&mut self, gap: u32) {
        if gap < MIN_FRONT_GAP {
            warn!(gap, min = MIN_FRONT_GAP, "front gap too small, raising to minimum");
        }
        self.front_gap = gap.max(MIN_FRONT_GAP);
    }

    /// Hand out a fresh id for a new overlay.
    pub fn allocate_handle_id(&mut self) -> HandleId {
        let id = HandleId(self.next_handle);
        self.next_handle += 1;
        id
    }

    // -- Accessors --

    pub fn front_gap(&self) -> u32 {
        self.front_gap
    }

    pub fn layer_counter(&self, layer: Layer) -> i32 {
        self.counters[layer.index()]
    }

    pub fn registration(&self, handle: HandleId) -> Option<&Registration> {
        self.registrations.get(&handle)
    }

    pub fn is_registered(&self, handle: HandleId) -> bool {
        self.registrations.contains_key(&handle)
    }

    pub fn z_index_of(&self, handle: HandleId) -> Option<i32> {
        self.registrations.get(&handle).map(|r| r.z_index)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// A priority that places a new registration above everything live in
    /// `layer` (or at the counter when the layer is empty).
    pub fn next_priority(&self, layer: Layer) -> u32 {
        let occupied = self.registrations.values().any(|r| r.layer == layer);
        let base = self.layer_counter(layer) - layer.min();
        base.max(0) as u32 + u32::from(occupied)
    }
}

impl Default for ZIndexAllocator {
    fn default() -> Self {
        Self::new()
    }
}
