//! Saving to and restoring from the persistence backend.

use dockhand_common::{PanelId, Placement, Point, Size};
use tracing::{debug, error, info, warn};

use super::chrome::FlyoutChrome;
use super::FlyoutCoordinator;
use crate::store::DescriptorFilter;

impl FlyoutCoordinator {
    /// Load the saved snapshot into the store and rebuild chrome for every
    /// floating panel at its saved geometry. Closed flyouts come back closed,
    /// and a recreated flyout docks back into its dock.
    ///
    /// Returns how many descriptors were restored.
    pub fn restore_from_persisted(&mut self) -> usize {
        let Some(persistence) = self.persistence.as_mut() else {
            debug!("no persistence backend, nothing to restore");
            return 0;
        };
        let location = persistence.describe();
        let snapshot = match persistence.restore() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                debug!(location = %location, "no saved panel state");
                return 0;
            }
            Err(e) => {
                error!(location = %location, error = %e, "failed to read saved panel state");
                return 0;
            }
        };

        let imported = match self.store.import(snapshot) {
            Ok(imported) => imported,
            Err(e) => {
                error!(location = %location, error = %e, "saved panel state rejected");
                return 0;
            }
        };

        let stale: Vec<PanelId> = self
            .flyouts
            .keys()
            .filter(|id| !self.store.get_descriptor(id).is_some_and(|d| d.is_floating()))
            .cloned()
            .collect();
        for id in stale {
            self.interaction.drop_target(&id);
            self.teardown_chrome(&id);
        }

        let floating: Vec<(PanelId, String, Option<Point>, Option<Size>, bool)> = self
            .store
            .list(&DescriptorFilter::placement(Placement::Floating))
            .into_iter()
            .map(|d| (d.id.clone(), d.title.clone(), d.position, d.size, d.visible))
            .collect();

        let mut reopened = 0;
        for (id, title, position, size, visible) in floating {
            self.interaction.drop_target(&id);
            self.teardown_chrome(&id);
            let position = position.unwrap_or_else(|| self.default_position());
            let size = size.unwrap_or_else(|| self.default_size());
            let handle = self.zindex.allocate_handle_id();
            let mut chrome = FlyoutChrome::new(
                handle,
                id.clone(),
                title,
                position,
                size,
                self.config.resize_handle,
            );
            chrome.displayed = visible;
            let z_index = self.float(chrome);
            debug!(panel = %id, z_index, visible, "saved flyout recreated");
            reopened += 1;
        }

        info!(location = %location, imported, reopened, "panel state restored");
        self.save("restore");
        imported
    }

    /// Save the whole store now, regardless of `save_on_transition`.
    pub fn save_all(&mut self) -> bool {
        if self.persistence.is_none() {
            warn!("save_all requested without a persistence backend");
            return false;
        }
        self.save("save_all")
    }

    /// Save after a committed transition, when configured to.
    pub(super) fn persist(&mut self, reason: &'static str) {
        if !self.save_on_transition {
            return;
        }
        self.save(reason);
    }

    fn save(&mut self, reason: &'static str) -> bool {
        let Some(persistence) = self.persistence.as_mut() else {
            return false;
        };
        let snapshot = self.store.export();
        match persistence.save(&snapshot) {
            Ok(()) => {
                debug!(reason, panels = snapshot.panels.len(), "panel state saved");
                true
            }
            Err(e) => {
                error!(reason, error = %e, "failed to save panel state");
                false
            }
        }
    }
}
