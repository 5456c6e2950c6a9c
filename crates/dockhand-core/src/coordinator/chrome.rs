//! Floating window chrome: title bar, dock/close buttons, resize handle,
//! and the slot the panel's content is mounted into.

use dockhand_common::{PanelId, Placement, Point, Rect, Size};
use serde::Serialize;

use super::content::ContentElement;
use crate::zindex::{HandleId, Stackable};

pub const TITLE_BAR_HEIGHT: f64 = 28.0;
pub const TITLE_BUTTON_WIDTH: f64 = 24.0;
pub const RESIZE_HANDLE_SIZE: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChromeControls {
    pub dock_button: bool,
    pub close_button: bool,
    pub resize_handle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ContentSlot {
    Empty,
    Mounted(ContentElement),
    /// Mount failed; the message is shown in place of the content.
    Error(String),
}

impl ContentSlot {
    pub fn is_mounted(&self) -> bool {
        matches!(self, ContentSlot::Mounted(_))
    }
}

/// Region of the chrome under a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromeHit {
    TitleBar,
    DockButton,
    CloseButton,
    ResizeHandle,
    Content,
}

/// The floating window wrapped around a flown-out panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlyoutChrome {
    pub handle: HandleId,
    pub panel: PanelId,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub z_index: Option<i32>,
    /// `false` while closed; the chrome and its content are kept for reuse.
    pub displayed: bool,
    pub controls: ChromeControls,
    pub content: ContentSlot,
    /// Placement the panel had before it flew out; docking restores it.
    pub return_placement: Placement,
}

impl FlyoutChrome {
    pub(crate) fn new(
        handle: HandleId,
        panel: PanelId,
        title: String,
        position: Point,
        size: Size,
        resize_handle: bool,
    ) -> Self {
        Self {
            handle,
            panel,
            title,
            position,
            size,
            z_index: None,
            displayed: true,
            controls: ChromeControls {
                dock_button: true,
                close_button: true,
                resize_handle,
            },
            content: ContentSlot::Empty,
            return_placement: Placement::Docked,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Which part of the chrome is under `point`, if any.
    ///
    /// Buttons sit at the right end of the title bar (close outermost); the
    /// resize handle is the bottom-right corner square.
    pub fn hit_test(&self, point: Point) -> Option<ChromeHit> {
        if !self.displayed || !self.bounds().contains(point) {
            return None;
        }
        let (local_x, local_y) = point.delta_from(self.position);
        let width = self.size.width;
        let height = self.size.height;

        if self.controls.resize_handle
            && local_x >= width - RESIZE_HANDLE_SIZE
            && local_y >= height - RESIZE_HANDLE_SIZE
        {
            return Some(ChromeHit::ResizeHandle);
        }

        if local_y < TITLE_BAR_HEIGHT {
            let from_right = width - local_x;
            if self.controls.close_button && from_right <= TITLE_BUTTON_WIDTH {
                return Some(ChromeHit::CloseButton);
            }
            if self.controls.dock_button
                && from_right > TITLE_BUTTON_WIDTH
                && from_right <= TITLE_BUTTON_WIDTH * 2.0
            {
                return Some(ChromeHit::DockButton);
            }
            return Some(ChromeHit::TitleBar);
        }

        Some(ChromeHit::Content)
    }
}

impl Stackable for FlyoutChrome {
    fn handle_id(&self) -> HandleId {
        self.handle
    }

    fn z_index(&self) -> Option<i32> {
        self.z_index
    }

    fn set_z_index(&mut self, z_index: Option<i32>) {
        self.z_index = z_index;
    }
}
