//! DOCKED / FLOATING / HIDDEN transitions.

use std::collections::BTreeMap;

use dockhand_common::{FlyoutError, PanelId, Placement, Point, Size};
use tracing::{debug, info, warn};

use super::chrome::{ContentSlot, FlyoutChrome};
use super::content::ContentSource;
use super::types::settle;
use super::{FlyoutCoordinator, FlyoutOptions};
use crate::store::{DescriptorDefaults, DescriptorPatch, DescriptorStore, PanelDescriptor};
use crate::zindex::{Layer, RegisterOptions};

impl FlyoutCoordinator {
    /// Create a docked panel and record how its content is produced.
    ///
    /// Hosts register panels before `restore_from_persisted`, which then
    /// overlays the saved placement onto them.
    pub fn register_panel(
        &mut self,
        id: PanelId,
        title: impl Into<String>,
        dock_id: impl Into<String>,
        content: Option<ContentSource>,
    ) -> bool {
        if !self
            .store
            .create_descriptor(id.clone(), dock_id, DescriptorDefaults::titled(title))
        {
            return false;
        }
        if let Some(source) = content {
            debug!(panel = %id, kind = source.kind(), "content source registered");
            self.content.insert(id, source);
        }
        true
    }

    /// Replace a panel's content source, remounting it if the panel is
    /// currently flown out.
    pub fn set_content(&mut self, id: &PanelId, source: ContentSource) -> bool {
        if !self.store.contains(id) {
            warn!(panel = %id, "set_content on unknown panel");
            return false;
        }
        let Some(mut chrome) = self.flyouts.remove(id) else {
            self.content.insert(id.clone(), source);
            return true;
        };

        self.unmount_from(&mut chrome);
        self.content.insert(id.clone(), source);
        let mounted = self.mount_into(&mut chrome);
        self.flyouts.insert(id.clone(), chrome);
        self.store
            .update_descriptor(id, DescriptorPatch::new().mounted(mounted));
        true
    }

    /// Move a panel out of its dock into floating chrome.
    pub fn fly_out(&mut self, id: &PanelId, options: FlyoutOptions) -> bool {
        settle("fly_out", self.try_fly_out(id, options)).is_some()
    }

    /// `fly_out` that reports why it was rejected. Returns the assigned
    /// z-index.
    pub fn try_fly_out(&mut self, id: &PanelId, options: FlyoutOptions) -> Result<i32, FlyoutError> {
        let descriptor = self.require(id)?;
        if descriptor.is_floating() {
            return Err(FlyoutError::InvalidState(format!("panel {id} is already floating")));
        }
        let return_placement = descriptor.placement;

        let title = options.title.unwrap_or_else(|| descriptor.title.clone());
        let position = options.position.unwrap_or_else(|| self.default_position());
        let size = options.size.unwrap_or_else(|| self.default_size());
        let resize_handle = options.resize_handle.unwrap_or(self.config.resize_handle);

        let handle = self.zindex.allocate_handle_id();
        let mut chrome = FlyoutChrome::new(handle, id.clone(), title, position, size, resize_handle);
        chrome.return_placement = return_placement;
        let z_index = self.float(chrome);
        info!(
            panel = %id,
            x = position.x,
            y = position.y,
            width = size.width,
            height = size.height,
            z_index,
            from = %return_placement,
            "panel flown out"
        );
        self.persist("fly_out");
        Ok(z_index)
    }

    /// Return a floating panel to its dock.
    pub fn dock(&mut self, id: &PanelId) -> bool {
        settle("dock", self.try_dock(id)).is_some()
    }

    pub fn try_dock(&mut self, id: &PanelId) -> Result<(), FlyoutError> {
        let descriptor = self.require(id)?;
        if !descriptor.is_floating() {
            return Err(FlyoutError::InvalidState(format!(
                "panel {id} is {}, not floating",
                descriptor.placement
            )));
        }
        let dock_id = descriptor.dock_id.clone();
        let placement = self
            .flyouts
            .get(id)
            .map_or(Placement::Docked, |chrome| chrome.return_placement);

        self.interaction.drop_target(id);
        self.teardown_chrome(id);
        self.store.update_descriptor(
            id,
            DescriptorPatch::new()
                .placement(placement)
                .position(None)
                .size(None)
                .z_index(None)
                .visible(placement == Placement::Docked)
                .mounted(false),
        );
        info!(panel = %id, dock = %dock_id, %placement, "panel docked");
        self.persist("dock");
        Ok(())
    }

    /// Hide a flyout without docking it. The chrome and its content are
    /// kept so `show_flyout` can bring them back.
    pub fn close_flyout(&mut self, id: &PanelId) -> bool {
        settle("close_flyout", self.try_close_flyout(id)).is_some()
    }

    pub fn try_close_flyout(&mut self, id: &PanelId) -> Result<(), FlyoutError> {
        let chrome = chrome_mut(&self.store, &mut self.flyouts, id)?;
        if !chrome.displayed {
            return Err(FlyoutError::InvalidState(format!("flyout {id} is already closed")));
        }
        chrome.displayed = false;

        self.interaction.drop_target(id);
        self.store
            .update_descriptor(id, DescriptorPatch::new().visible(false));
        info!(panel = %id, "flyout closed");
        self.persist("close_flyout");
        Ok(())
    }

    /// Re-display a closed flyout.
    pub fn show_flyout(&mut self, id: &PanelId) -> bool {
        settle("show_flyout", self.try_show_flyout(id)).is_some()
    }

    pub fn try_show_flyout(&mut self, id: &PanelId) -> Result<(), FlyoutError> {
        let focus = self.config.focus_on_show;
        let chrome = chrome_mut(&self.store, &mut self.flyouts, id)?;
        if chrome.displayed {
            return Err(FlyoutError::InvalidState(format!("flyout {id} is already shown")));
        }
        chrome.displayed = true;

        let mut patch = DescriptorPatch::new().visible(true);
        if focus {
            if let Some(z_index) = self.zindex.bring_to_front(chrome) {
                patch = patch.z_index(Some(z_index));
            }
        }
        self.store.update_descriptor(id, patch);
        info!(panel = %id, "flyout shown");
        self.persist("show_flyout");
        Ok(())
    }

    /// Raise a flyout above every other overlay in the POPUP layer.
    pub fn focus_flyout(&mut self, id: &PanelId) -> bool {
        settle("focus_flyout", self.try_focus_flyout(id)).is_some()
    }

    pub fn try_focus_flyout(&mut self, id: &PanelId) -> Result<i32, FlyoutError> {
        let chrome = chrome_mut(&self.store, &mut self.flyouts, id)?;
        if !chrome.displayed {
            return Err(FlyoutError::InvalidState(format!("flyout {id} is closed")));
        }
        let z_index = self
            .zindex
            .bring_to_front(chrome)
            .ok_or_else(|| FlyoutError::InvalidTarget(format!("flyout {id} has no z-index")))?;
        self.store
            .update_descriptor(id, DescriptorPatch::new().z_index(Some(z_index)));
        debug!(panel = %id, z_index, "flyout focused");
        Ok(z_index)
    }

    /// Dock a floating panel, otherwise fly it out with default geometry.
    /// Toggling twice returns the panel to the placement it started in.
    pub fn toggle_flyout(&mut self, id: &PanelId) -> bool {
        if self.is_flying_out(id) {
            self.dock(id)
        } else {
            self.fly_out(id, FlyoutOptions::default())
        }
    }

    /// DOCKED -> HIDDEN.
    pub fn hide_panel(&mut self, id: &PanelId) -> bool {
        settle(
            "hide_panel",
            self.swap_docked(id, Placement::Docked, Placement::Hidden),
        )
        .is_some()
    }

    /// HIDDEN -> DOCKED.
    pub fn show_panel(&mut self, id: &PanelId) -> bool {
        settle(
            "show_panel",
            self.swap_docked(id, Placement::Hidden, Placement::Docked),
        )
        .is_some()
    }

    /// Tear down everything owned for `id` and remove its descriptor.
    pub fn destroy_panel(&mut self, id: &PanelId) -> bool {
        if !self.store.contains(id) {
            warn!(panel = %id, "destroy_panel on unknown panel");
            return false;
        }
        self.interaction.drop_target(id);
        self.teardown_chrome(id);
        self.content.remove(id);
        self.store.remove_descriptor(id);
        info!(panel = %id, "panel destroyed");
        self.persist("destroy_panel");
        true
    }

    // -- Queries --

    /// Whether `id` has floating chrome, displayed or closed.
    pub fn is_flying_out(&self, id: &PanelId) -> bool {
        self.flyouts.contains_key(id)
            && self
                .store
                .get_descriptor(id)
                .is_some_and(PanelDescriptor::is_floating)
    }

    /// Ids of all floating panels, sorted.
    pub fn flyout_panels(&self) -> Vec<PanelId> {
        self.flyouts
            .keys()
            .filter(|id| self.is_flying_out(id))
            .cloned()
            .collect()
    }

    // -- Helpers --

    fn require(&self, id: &PanelId) -> Result<&PanelDescriptor, FlyoutError> {
        self.store
            .get_descriptor(id)
            .ok_or_else(|| FlyoutError::InvalidTarget(format!("unknown panel {id}")))
    }

    fn swap_docked(&mut self, id: &PanelId, from: Placement, to: Placement) -> Result<(), FlyoutError> {
        let descriptor = self.require(id)?;
        if descriptor.placement != from {
            return Err(FlyoutError::InvalidState(format!(
                "panel {id} is {}, expected {from}",
                descriptor.placement
            )));
        }
        self.store.update_descriptor(
            id,
            DescriptorPatch::new()
                .placement(to)
                .visible(to == Placement::Docked),
        );
        info!(panel = %id, %from, %to, "panel placement changed");
        self.persist("placement");
        Ok(())
    }

    /// Cascade defaults so successive flyouts do not land on each other.
    pub(super) fn default_position(&self) -> Point {
        let open = self.flyouts.values().filter(|c| c.displayed).count() as f64;
        let step = self.config.cascade_offset * open;
        Point::new(self.config.default_x + step, self.config.default_y + step)
    }

    pub(super) fn default_size(&self) -> Size {
        Size::new(self.config.default_width, self.config.default_height)
    }

    /// Register `chrome` in the POPUP layer, mount its content, and write the
    /// floating geometry to the store in a single update.
    pub(super) fn float(&mut self, mut chrome: FlyoutChrome) -> i32 {
        let id = chrome.panel.clone();
        let priority = self.zindex.next_priority(Layer::Popup);
        let z_index = self.zindex.register_in(
            &mut chrome,
            Layer::Popup,
            priority,
            RegisterOptions::isolated().with_label(id.as_str()),
        );
        let mounted = self.mount_into(&mut chrome);
        let patch = DescriptorPatch::new()
            .placement(Placement::Floating)
            .position(Some(chrome.position))
            .size(Some(chrome.size))
            .z_index(Some(z_index))
            .visible(chrome.displayed)
            .mounted(mounted);
        self.flyouts.insert(id.clone(), chrome);
        self.store.update_descriptor(&id, patch);
        z_index
    }

    pub(super) fn teardown_chrome(&mut self, id: &PanelId) {
        if let Some(mut chrome) = self.flyouts.remove(id) {
            self.unmount_from(&mut chrome);
            self.zindex.unregister(&mut chrome);
        }
    }

    /// Mount the panel's content into `chrome`, recording a visible error in
    /// the slot when there is no provider or the provider fails.
    fn mount_into(&mut self, chrome: &mut FlyoutChrome) -> bool {
        let result = match self.content.get_mut(&chrome.panel) {
            Some(source) => source.mount(&chrome.panel),
            None => Err(FlyoutError::ContentMountFailure {
                panel: chrome.panel.to_string(),
                reason: "no content provider registered".to_string(),
            }),
        };
        match result {
            Ok(element) => {
                chrome.content = ContentSlot::Mounted(element);
                true
            }
            Err(error) => {
                warn!(panel = %chrome.panel, %error, "content mount failed");
                chrome.content = ContentSlot::Error(error.to_string());
                false
            }
        }
    }

    fn unmount_from(&mut self, chrome: &mut FlyoutChrome) {
        if chrome.content.is_mounted() {
            if let Some(source) = self.content.get_mut(&chrome.panel) {
                source.unmount(&chrome.panel);
            }
        }
        chrome.content = ContentSlot::Empty;
    }
}

/// Floating chrome for `id`, borrowed apart from the rest of the coordinator.
pub(super) fn chrome_mut<'a>(
    store: &DescriptorStore,
    flyouts: &'a mut BTreeMap<PanelId, FlyoutChrome>,
    id: &PanelId,
) -> Result<&'a mut FlyoutChrome, FlyoutError> {
    if !store.contains(id) {
        return Err(FlyoutError::InvalidTarget(format!("unknown panel {id}")));
    }
    flyouts
        .get_mut(id)
        .ok_or_else(|| FlyoutError::InvalidState(format!("panel {id} is not floating")))
}
