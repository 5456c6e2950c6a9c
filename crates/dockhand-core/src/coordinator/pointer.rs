//! Pointer entry points: hit-testing chrome and forwarding drag/resize.

use dockhand_common::{FlyoutError, PanelId};
use tracing::debug;

use super::chrome::ChromeHit;
use super::transitions::chrome_mut;
use super::types::settle;
use super::FlyoutCoordinator;
use crate::interaction::{GeometryUpdate, PointerEvent};
use crate::store::DescriptorPatch;

impl FlyoutCoordinator {
    /// Start dragging a flyout by its title bar. The flyout is raised first.
    pub fn begin_drag(&mut self, id: &PanelId, pointer: PointerEvent) -> bool {
        settle("begin_drag", self.try_begin(id, pointer, false)).is_some()
    }

    /// Start resizing a flyout from its resize handle.
    pub fn begin_resize(&mut self, id: &PanelId, pointer: PointerEvent) -> bool {
        settle("begin_resize", self.try_begin(id, pointer, true)).is_some()
    }

    /// Feed a pointer move to the active session and mirror the result onto
    /// the chrome.
    pub fn pointer_move(&mut self, pointer: PointerEvent) -> Option<GeometryUpdate> {
        let update = self.interaction.pointer_move(&mut self.store, pointer)?;
        self.sync_chrome(&update);
        Some(update)
    }

    /// Finish the active session and persist the committed geometry.
    pub fn pointer_up(&mut self, pointer: PointerEvent) -> Option<GeometryUpdate> {
        let update = self.interaction.pointer_up(&mut self.store, pointer)?;
        self.sync_chrome(&update);
        self.persist("pointer_up");
        Some(update)
    }

    /// Route a press to whatever chrome is topmost under the pointer.
    ///
    /// Title bar starts a drag, the corner handle a resize, the buttons dock
    /// or close, and the content area just raises the flyout.
    pub fn pointer_down(&mut self, pointer: PointerEvent) -> Option<(PanelId, ChromeHit)> {
        let (panel, hit) = self
            .flyouts
            .values()
            .filter_map(|chrome| {
                chrome
                    .hit_test(pointer.position)
                    .map(|hit| (chrome.z_index.unwrap_or(i32::MIN), chrome.panel.clone(), hit))
            })
            .max_by_key(|(z_index, _, _)| *z_index)
            .map(|(_, panel, hit)| (panel, hit))?;

        debug!(panel = %panel, ?hit, "pointer down on chrome");
        match hit {
            ChromeHit::TitleBar => self.begin_drag(&panel, pointer),
            ChromeHit::ResizeHandle => self.begin_resize(&panel, pointer),
            ChromeHit::DockButton => self.dock(&panel),
            ChromeHit::CloseButton => self.close_flyout(&panel),
            ChromeHit::Content => self.focus_flyout(&panel),
        };
        Some((panel, hit))
    }

    fn try_begin(&mut self, id: &PanelId, pointer: PointerEvent, resize: bool) -> Result<(), FlyoutError> {
        let chrome = chrome_mut(&self.store, &mut self.flyouts, id)?;
        if !chrome.displayed {
            return Err(FlyoutError::InvalidState(format!("flyout {id} is closed")));
        }
        if resize && !chrome.controls.resize_handle {
            return Err(FlyoutError::InvalidState(format!("flyout {id} has no resize handle")));
        }

        if resize {
            self.interaction.start_resize(&self.store, id, pointer)?;
        } else {
            self.interaction.start_drag(&self.store, id, pointer)?;
        }

        let chrome = chrome_mut(&self.store, &mut self.flyouts, id)?;
        if let Some(z_index) = self.zindex.bring_to_front(chrome) {
            self.store
                .update_descriptor(id, DescriptorPatch::new().z_index(Some(z_index)));
        }
        Ok(())
    }

    fn sync_chrome(&mut self, update: &GeometryUpdate) {
        let Some(chrome) = self.flyouts.get_mut(update.panel()) else {
            return;
        };
        match update {
            GeometryUpdate::Moved { position, .. } => chrome.position = *position,
            GeometryUpdate::Resized { size, .. } => chrome.size = *size,
        }
    }
}
