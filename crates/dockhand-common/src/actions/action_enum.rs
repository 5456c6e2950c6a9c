use serde::{Deserialize, Serialize};

use crate::types::{PanelId, Point, Size};

/// Every user-triggerable panel action.
///
/// Keybinds, menus, and the scripted CLI host all resolve to an `Action`;
/// the coordinator's `execute` routes each one to a transition or pointer
/// handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    // -- Registration --
    RegisterPanel {
        id: PanelId,
        title: String,
        dock: String,
        /// Static body mounted whenever the panel flies out.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    DestroyPanel(PanelId),

    // -- Placement --
    FlyOut {
        panel: PanelId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Point>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Size>,
    },
    Dock(PanelId),
    ToggleFlyout(PanelId),
    CloseFlyout(PanelId),
    ShowFlyout(PanelId),
    FocusFlyout(PanelId),
    HidePanel(PanelId),
    ShowPanel(PanelId),

    // -- Pointer --
    BeginDrag { panel: PanelId, at: Point },
    BeginResize { panel: PanelId, at: Point },
    PointerMove(Point),
    PointerUp(Point),

    // -- Persistence --
    SaveAll,

    // -- Noop --
    None,
}
