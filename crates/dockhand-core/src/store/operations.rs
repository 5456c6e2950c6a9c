//! Create, update, list, and remove descriptors.

use chrono::Utc;
use dockhand_common::{PanelId, Placement};
use tracing::{debug, warn};

use super::{
    DescriptorDefaults, DescriptorFilter, DescriptorPatch, DescriptorStore, PanelDescriptor,
    StoreAction, StoreEvent,
};

impl DescriptorStore {
    /// Create a descriptor for `id` owned by `dock_id`.
    ///
    /// Returns `false` and leaves the existing record untouched when `id` is
    /// already present, or when `dock_id` is empty.
    pub fn create_descriptor(
        &mut self,
        id: PanelId,
        dock_id: impl Into<String>,
        defaults: DescriptorDefaults,
    ) -> bool {
        let dock_id = dock_id.into();
        if dock_id.trim().is_empty() {
            warn!(panel = %id, "refusing to create descriptor without a dock");
            return false;
        }
        if self.descriptors.contains_key(&id) {
            warn!(panel = %id, "descriptor already exists");
            return false;
        }

        let placement = match defaults.placement {
            Placement::Floating => {
                warn!(panel = %id, "panels are created docked; use the coordinator to float");
                Placement::Docked
            }
            other => other,
        };
        let order = defaults
            .order
            .unwrap_or_else(|| self.next_order_in(&dock_id));
        let now = Utc::now();
        let descriptor = PanelDescriptor {
            title: defaults.title.unwrap_or_else(|| id.to_string()),
            id: id.clone(),
            placement,
            dock_id,
            position: None,
            size: None,
            z_index: None,
            visible: defaults.visible,
            mounted: false,
            order,
            created_at: now,
            last_updated: now,
        };

        debug!(panel = %id, dock = %descriptor.dock_id, order, "descriptor created");
        self.descriptors.insert(id, descriptor.clone());
        self.notify(StoreEvent::Created(descriptor));
        true
    }

    /// Merge `patch` into the descriptor for `id`.
    ///
    /// Unknown ids are a silent no-op returning `false`, so late updates for
    /// a destroyed panel are harmless. A patch that changes nothing neither
    /// stamps `last_updated` nor notifies.
    pub fn update_descriptor(&mut self, id: &PanelId, patch: DescriptorPatch) -> bool {
        let Some(descriptor) = self.descriptors.get_mut(id) else {
            debug!(panel = %id, "update for unknown descriptor ignored");
            return false;
        };

        if apply_patch(descriptor, patch) {
            descriptor.last_updated = Utc::now();
            let snapshot = descriptor.clone();
            self.notify(StoreEvent::Updated(snapshot));
        }
        true
    }

    /// Remove the descriptor for `id`. Explicit destruction only.
    pub fn remove_descriptor(&mut self, id: &PanelId) -> Option<PanelDescriptor> {
        let removed = self.descriptors.remove(id)?;
        debug!(panel = %id, "descriptor removed");
        self.notify(StoreEvent::Removed(id.clone()));
        Some(removed)
    }

    /// Descriptors matching `filter`, ordered by dock, stack order, then id.
    pub fn list(&self, filter: &DescriptorFilter) -> Vec<&PanelDescriptor> {
        let mut out: Vec<&PanelDescriptor> = self
            .descriptors
            .values()
            .filter(|d| filter.matches(d))
            .collect();
        out.sort_by(|a, b| {
            a.dock_id
                .cmp(&b.dock_id)
                .then(a.order.cmp(&b.order))
                .then(a.id.cmp(&b.id))
        });
        out
    }

    /// Apply a `StoreAction`. Returns whether it took effect.
    pub fn dispatch(&mut self, action: StoreAction) -> bool {
        match action {
            StoreAction::Create {
                id,
                dock_id,
                defaults,
            } => self.create_descriptor(id, dock_id, defaults),
            StoreAction::Update { id, patch } => self.update_descriptor(&id, patch),
            StoreAction::Remove(id) => self.remove_descriptor(&id).is_some(),
        }
    }

    fn next_order_in(&self, dock_id: &str) -> u32 {
        self.descriptors
            .values()
            .filter(|d| d.dock_id == dock_id)
            .map(|d| d.order + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Merge `patch` into `d`, returning whether any field changed.
fn apply_patch(d: &mut PanelDescriptor, patch: DescriptorPatch) -> bool {
    let mut changed = false;

    fn set<T: PartialEq>(field: &mut T, value: Option<T>, changed: &mut bool) {
        if let Some(value) = value {
            if *field != value {
                *field = value;
                *changed = true;
            }
        }
    }

    set(&mut d.title, patch.title, &mut changed);
    set(&mut d.placement, patch.placement, &mut changed);
    match patch.dock_id {
        Some(dock) if dock.trim().is_empty() => {
            warn!(panel = %d.id, "ignoring attempt to clear dock id");
        }
        other => set(&mut d.dock_id, other, &mut changed),
    }
    set(&mut d.position, patch.position, &mut changed);
    set(&mut d.size, patch.size, &mut changed);
    set(&mut d.z_index, patch.z_index, &mut changed);
    set(&mut d.visible, patch.visible, &mut changed);
    set(&mut d.mounted, patch.mounted, &mut changed);
    set(&mut d.order, patch.order, &mut changed);

    changed
}
