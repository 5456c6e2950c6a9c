//! Action dispatch for keybinds, menus, and scripted hosts.

use dockhand_common::Action;
use tracing::debug;

use super::{ContentSource, FlyoutCoordinator, FlyoutOptions};
use crate::interaction::PointerEvent;

impl FlyoutCoordinator {
    /// Route an `Action` to the matching operation. Returns whether it took
    /// effect.
    pub fn execute(&mut self, action: &Action) -> bool {
        debug!(action = action.label(), "executing action");
        match action {
            Action::RegisterPanel {
                id,
                title,
                dock,
                content,
            } => self.register_panel(
                id.clone(),
                title.clone(),
                dock.clone(),
                content.clone().map(ContentSource::text),
            ),
            Action::DestroyPanel(id) => self.destroy_panel(id),
            Action::FlyOut {
                panel,
                position,
                size,
            } => {
                let options = FlyoutOptions {
                    position: *position,
                    size: *size,
                    ..FlyoutOptions::default()
                };
                self.fly_out(panel, options)
            }
            Action::Dock(id) => self.dock(id),
            Action::ToggleFlyout(id) => self.toggle_flyout(id),
            Action::CloseFlyout(id) => self.close_flyout(id),
            Action::ShowFlyout(id) => self.show_flyout(id),
            Action::FocusFlyout(id) => self.focus_flyout(id),
            Action::HidePanel(id) => self.hide_panel(id),
            Action::ShowPanel(id) => self.show_panel(id),
            Action::BeginDrag { panel, at } => self.begin_drag(panel, PointerEvent::new(*at, 0)),
            Action::BeginResize { panel, at } => {
                self.begin_resize(panel, PointerEvent::new(*at, 0))
            }
            Action::PointerMove(at) => self.pointer_move(PointerEvent::new(*at, 0)).is_some(),
            Action::PointerUp(at) => self.pointer_up(PointerEvent::new(*at, 0)).is_some(),
            Action::SaveAll => self.save_all(),
            Action::None => false,
        }
    }
}
