//! Content providers mounted into flyout chrome.

use std::fmt;

use dockhand_common::{FlyoutError, PanelId};
use serde::Serialize;

/// Rendered panel content placed in a chrome's content slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentElement {
    pub panel: PanelId,
    pub body: String,
}

impl ContentElement {
    pub fn new(panel: PanelId, body: impl Into<String>) -> Self {
        Self {
            panel,
            body: body.into(),
        }
    }
}

/// A stateful content instance that survives being closed and re-shown.
pub trait PanelComponent {
    fn mount(&mut self, panel: &PanelId) -> Result<ContentElement, String>;

    fn unmount(&mut self, _panel: &PanelId) {}
}

pub type Renderer = Box<dyn FnMut(&PanelId) -> Result<ContentElement, String>>;

/// How a panel produces its content. Resolved once at registration.
pub enum ContentSource {
    Component(Box<dyn PanelComponent>),
    Renderer(Renderer),
    Static(String),
}

impl ContentSource {
    pub fn component(component: impl PanelComponent + 'static) -> Self {
        ContentSource::Component(Box::new(component))
    }

    pub fn renderer(
        render: impl FnMut(&PanelId) -> Result<ContentElement, String> + 'static,
    ) -> Self {
        ContentSource::Renderer(Box::new(render))
    }

    pub fn text(body: impl Into<String>) -> Self {
        ContentSource::Static(body.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ContentSource::Component(_) => "component",
            ContentSource::Renderer(_) => "renderer",
            ContentSource::Static(_) => "static",
        }
    }

    pub(crate) fn mount(&mut self, panel: &PanelId) -> Result<ContentElement, FlyoutError> {
        let result = match self {
            ContentSource::Component(component) => component.mount(panel),
            ContentSource::Renderer(render) => render(panel),
            ContentSource::Static(body) => Ok(ContentElement::new(panel.clone(), body.clone())),
        };
        result.map_err(|reason| FlyoutError::ContentMountFailure {
            panel: panel.to_string(),
            reason,
        })
    }

    pub(crate) fn unmount(&mut self, panel: &PanelId) {
        if let ContentSource::Component(component) = self {
            component.unmount(panel);
        }
    }
}

impl fmt::Debug for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentSource::{}", self.kind())
    }
}
