use super::Action;

impl Action {
    /// Human-readable label for menus and the command palette.
    pub fn label(&self) -> &'static str {
        match self {
            Action::RegisterPanel { .. } => "Register Panel",
            Action::DestroyPanel(_) => "Destroy Panel",
            Action::FlyOut { .. } => "Fly Out Panel",
            Action::Dock(_) => "Dock Panel",
            Action::ToggleFlyout(_) => "Toggle Flyout",
            Action::CloseFlyout(_) => "Close Flyout",
            Action::ShowFlyout(_) => "Show Flyout",
            Action::FocusFlyout(_) => "Bring Flyout to Front",
            Action::HidePanel(_) => "Hide Panel",
            Action::ShowPanel(_) => "Show Panel",
            Action::BeginDrag { .. } => "Begin Drag",
            Action::BeginResize { .. } => "Begin Resize",
            Action::PointerMove(_) => "Pointer Move",
            Action::PointerUp(_) => "Pointer Up",
            Action::SaveAll => "Save Panel Layout",
            Action::None => "None",
        }
    }

    /// Whether the action only carries pointer input and should not be
    /// offered in menus.
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Action::BeginDrag { .. }
                | Action::BeginResize { .. }
                | Action::PointerMove(_)
                | Action::PointerUp(_)
        )
    }
}
