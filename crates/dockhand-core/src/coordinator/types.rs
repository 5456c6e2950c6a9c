//! Core types for the flyout/dock coordinator.

use std::collections::{BTreeMap, HashMap};

use dockhand_common::{FlyoutError, PanelId, Point, Size};
use dockhand_config::schema::FlyoutConfig;
use dockhand_config::DockhandConfig;
use tracing::warn;

use super::chrome::FlyoutChrome;
use super::content::ContentSource;
use crate::interaction::InteractionController;
use crate::persistence::StatePersistence;
use crate::store::{DescriptorStore, StoreEvent, SubscriptionId};
use crate::zindex::ZIndexAllocator;

/// Per-call overrides for `fly_out`. Unset fields fall back to config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlyoutOptions {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub resize_handle: Option<bool>,
    pub title: Option<String>,
}

impl FlyoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn sized(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn resize_handle(mut self, enabled: bool) -> Self {
        self.resize_handle = Some(enabled);
        self
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Moves panels between their dock and floating chrome.
///
/// Owns the descriptor store, the z-index allocator, and the interaction
/// controller, and keeps chrome geometry in step with the store.
pub struct FlyoutCoordinator {
    pub(super) store: DescriptorStore,
    pub(super) zindex: ZIndexAllocator,
    pub(super) interaction: InteractionController,
    /// Chrome for every floating panel, displayed or closed.
    pub(super) flyouts: BTreeMap<PanelId, FlyoutChrome>,
    pub(super) content: HashMap<PanelId, ContentSource>,
    pub(super) persistence: Option<Box<dyn StatePersistence>>,
    pub(super) config: FlyoutConfig,
    pub(super) save_on_transition: bool,
}

impl FlyoutCoordinator {
    pub fn new() -> Self {
        Self::from_config(&DockhandConfig::default())
    }

    pub fn from_config(config: &DockhandConfig) -> Self {
        Self {
            store: DescriptorStore::new(),
            zindex: ZIndexAllocator::from_config(&config.zindex),
            interaction: InteractionController::from_config(&config.flyout),
            flyouts: BTreeMap::new(),
            content: HashMap::new(),
            persistence: None,
            config: config.flyout.clone(),
            save_on_transition: config.persistence.save_on_transition,
        }
    }

    /// Attach a persistence backend.
    pub fn with_persistence(mut self, persistence: impl StatePersistence + 'static) -> Self {
        self.persistence = Some(Box::new(persistence));
        self
    }

    /// Forward store notifications to `callback`.
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    // -- Accessors --

    pub fn store(&self) -> &DescriptorStore {
        &self.store
    }

    pub fn zindex(&self) -> &ZIndexAllocator {
        &self.zindex
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn chrome(&self, id: &PanelId) -> Option<&FlyoutChrome> {
        self.flyouts.get(id)
    }

    pub fn config(&self) -> &FlyoutConfig {
        &self.config
    }

    pub fn has_persistence(&self) -> bool {
        self.persistence.is_some()
    }
}

impl Default for FlyoutCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlyoutCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlyoutCoordinator")
            .field("store", &self.store)
            .field("zindex", &self.zindex)
            .field("interaction", &self.interaction)
            .field("flyouts", &self.flyouts.keys().collect::<Vec<_>>())
            .field(
                "persistence",
                &self.persistence.as_ref().map(|p| p.describe()),
            )
            .finish()
    }
}

/// Log a rejected operation and collapse it to `Option`.
pub(super) fn settle<T>(operation: &'static str, result: Result<T, FlyoutError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(operation, %error, "flyout operation rejected");
            None
        }
    }
}
