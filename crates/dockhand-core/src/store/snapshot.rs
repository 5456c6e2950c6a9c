//! Export and import of the whole store for persistence.

use chrono::Utc;
use dockhand_common::PersistError;
use tracing::{info, warn};

use super::{DescriptorStore, StoreEvent, StoreSnapshot, SNAPSHOT_VERSION};

impl DescriptorStore {
    /// Copy every descriptor into a versioned snapshot.
    pub fn export(&self) -> StoreSnapshot {
        StoreSnapshot {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            panels: self.descriptors.values().cloned().collect(),
        }
    }

    /// Merge a snapshot into the store: each persisted descriptor replaces
    /// the live one with the same id, other live descriptors are kept.
    ///
    /// Emits a single `Reset` event. Returns how many descriptors were taken
    /// from the snapshot.
    pub fn import(&mut self, snapshot: StoreSnapshot) -> Result<usize, PersistError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistError::UnsupportedVersion(snapshot.version));
        }

        let mut imported = 0;
        for descriptor in snapshot.panels {
            if descriptor.dock_id.trim().is_empty() {
                warn!(panel = %descriptor.id, "skipping persisted panel without a dock");
                continue;
            }
            self.descriptors.insert(descriptor.id.clone(), descriptor);
            imported += 1;
        }

        info!(imported, total = self.descriptors.len(), "store imported from snapshot");
        self.notify(StoreEvent::Reset);
        Ok(imported)
    }
}
