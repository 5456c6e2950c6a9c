//! Start, stream, and finish drag/resize sessions.

use dockhand_common::{FlyoutError, PanelId, SessionId, Size};
use tracing::{debug, info, warn};

use super::{
    ActiveSession, DragSession, GeometryUpdate, InteractionController, PointerEvent,
    ResizeSession, SessionKind,
};
use crate::store::{DescriptorPatch, DescriptorStore, PanelDescriptor};

impl InteractionController {
    /// Begin moving a floating panel with the pointer.
    pub fn start_drag(
        &mut self,
        store: &DescriptorStore,
        panel: &PanelId,
        pointer: PointerEvent,
    ) -> Result<SessionId, FlyoutError> {
        let descriptor = self.check_start(store, panel, &pointer, SessionKind::Drag)?;
        let start_position = descriptor.position.ok_or_else(|| {
            FlyoutError::InvalidTarget(format!("panel {panel} has no floating position"))
        })?;

        let session = DragSession {
            id: SessionId::drag(),
            panel: panel.clone(),
            pointer_id: pointer.pointer_id,
            origin: pointer.position,
            start_position,
            last_position: start_position,
        };
        Ok(self.begin(ActiveSession::Drag(session)))
    }

    /// Begin resizing a floating panel from its handle.
    pub fn start_resize(
        &mut self,
        store: &DescriptorStore,
        panel: &PanelId,
        pointer: PointerEvent,
    ) -> Result<SessionId, FlyoutError> {
        let descriptor = self.check_start(store, panel, &pointer, SessionKind::Resize)?;
        let start_size = descriptor.size.ok_or_else(|| {
            FlyoutError::InvalidTarget(format!("panel {panel} has no floating size"))
        })?;

        let session = ResizeSession {
            id: SessionId::resize(),
            panel: panel.clone(),
            pointer_id: pointer.pointer_id,
            origin: pointer.position,
            start_size,
            last_size: start_size,
        };
        Ok(self.begin(ActiveSession::Resize(session)))
    }

    /// Stream the active session's geometry into the store.
    ///
    /// Returns `None` when idle, when the event belongs to another pointer,
    /// or when the target vanished (which also ends the session).
    pub fn pointer_move(
        &mut self,
        store: &mut DescriptorStore,
        pointer: PointerEvent,
    ) -> Option<GeometryUpdate> {
        if !self.accepts(&pointer) {
            return None;
        }
        if !self.target_alive(store) {
            return None;
        }
        let update = self.track(pointer)?;
        commit(store, &update);
        Some(update)
    }

    /// End the active session with a final commit at the release point.
    pub fn pointer_up(
        &mut self,
        store: &mut DescriptorStore,
        pointer: PointerEvent,
    ) -> Option<GeometryUpdate> {
        if !self.accepts(&pointer) {
            return None;
        }
        if !self.target_alive(store) {
            return None;
        }
        let update = self.track(pointer)?;
        commit(store, &update);

        if let Some(session) = self.end() {
            info!(
                session = %session.id(),
                kind = %session.kind(),
                panel = %session.panel(),
                "interaction finished"
            );
        }
        Some(update)
    }

    /// End any session targeting `panel` without committing. Used when the
    /// panel is docked or destroyed mid-gesture.
    pub(crate) fn drop_target(&mut self, panel: &PanelId) -> bool {
        if self.slot.as_ref().is_some_and(|s| s.panel() == panel) {
            if let Some(session) = self.end() {
                debug!(session = %session.id(), panel = %panel, "session target removed");
            }
            return true;
        }
        false
    }

    fn check_start<'s>(
        &self,
        store: &'s DescriptorStore,
        panel: &PanelId,
        pointer: &PointerEvent,
        kind: SessionKind,
    ) -> Result<&'s PanelDescriptor, FlyoutError> {
        if !pointer.position.is_finite() {
            return Err(FlyoutError::InvalidState(format!(
                "cannot start {kind} on {panel}: pointer at non-finite position"
            )));
        }
        if let Some(active) = &self.slot {
            return Err(FlyoutError::InvalidState(format!(
                "cannot start {kind} on {panel}: {} session {} active on {}",
                active.kind(),
                active.id(),
                active.panel()
            )));
        }
        let descriptor = store
            .get_descriptor(panel)
            .ok_or_else(|| FlyoutError::InvalidTarget(format!("unknown panel {panel}")))?;
        if !descriptor.is_floating() {
            return Err(FlyoutError::InvalidTarget(format!(
                "panel {panel} is {} and cannot {kind}",
                descriptor.placement
            )));
        }
        Ok(descriptor)
    }

    fn begin(&mut self, session: ActiveSession) -> SessionId {
        let id = session.id().clone();
        debug!(
            session = %id,
            kind = %session.kind(),
            panel = %session.panel(),
            "interaction started"
        );
        self.slot = Some(session);
        self.listeners.attach();
        id
    }

    fn end(&mut self) -> Option<ActiveSession> {
        let session = self.slot.take();
        self.listeners.detach();
        session
    }

    /// Events from other pointers are ignored; non-finite positions are
    /// dropped so they never reach the store.
    fn accepts(&self, pointer: &PointerEvent) -> bool {
        let Some(session) = &self.slot else {
            return false;
        };
        if session.pointer_id() != pointer.pointer_id {
            return false;
        }
        if !pointer.position.is_finite() {
            warn!(
                session = %session.id(),
                x = pointer.position.x,
                y = pointer.position.y,
                "ignoring non-finite pointer position"
            );
            return false;
        }
        true
    }

    /// Ends the session silently if its target is gone or no longer floating.
    fn target_alive(&mut self, store: &DescriptorStore) -> bool {
        let Some(session) = &self.slot else {
            return false;
        };
        let alive = store
            .get_descriptor(session.panel())
            .is_some_and(PanelDescriptor::is_floating);
        if !alive {
            let panel = session.panel().clone();
            warn!(panel = %panel, "interaction target vanished, ending session");
            self.end();
        }
        alive
    }

    /// Geometry for `pointer`, always measured from the session origin so a
    /// missed or repeated move never accumulates error.
    fn track(&mut self, pointer: PointerEvent) -> Option<GeometryUpdate> {
        let min_size = self.min_size;
        let session = self.slot.as_mut()?;
        let update = match session {
            ActiveSession::Drag(drag) => {
                let (dx, dy) = pointer.position.delta_from(drag.origin);
                drag.last_position = drag.start_position.offset(dx, dy);
                GeometryUpdate::Moved {
                    panel: drag.panel.clone(),
                    position: drag.last_position,
                }
            }
            ActiveSession::Resize(resize) => {
                let (dx, dy) = pointer.position.delta_from(resize.origin);
                resize.last_size = Size::new(
                    resize.start_size.width + dx,
                    resize.start_size.height + dy,
                )
                .at_least(min_size);
                GeometryUpdate::Resized {
                    panel: resize.panel.clone(),
                    size: resize.last_size,
                }
            }
        };
        Some(update)
    }
}

fn commit(store: &mut DescriptorStore, update: &GeometryUpdate) {
    let patch = match update {
        GeometryUpdate::Moved { position, .. } => DescriptorPatch::new().position(Some(*position)),
        GeometryUpdate::Resized { size, .. } => DescriptorPatch::new().size(Some(*size)),
    };
    store.update_descriptor(update.panel(), patch);
}
