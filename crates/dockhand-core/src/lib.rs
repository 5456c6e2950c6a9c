//! Floating/docking panel core: z-index layers, the panel descriptor store,
//! pointer-driven drag/resize sessions, and the flyout/dock coordinator.

pub mod coordinator;
pub mod interaction;
pub mod persistence;
pub mod store;
pub mod zindex;

pub use coordinator::{
    ChromeHit, ContentElement, ContentSlot, ContentSource, FlyoutChrome, FlyoutCoordinator,
    FlyoutOptions, PanelComponent,
};
pub use interaction::{ActiveSession, GeometryUpdate, InteractionController, PointerEvent};
pub use persistence::{JsonFilePersistence, MemoryPersistence, StatePersistence};
pub use store::{
    DescriptorDefaults, DescriptorFilter, DescriptorPatch, DescriptorStore, PanelDescriptor,
    StoreAction, StoreEvent, StoreSnapshot,
};
pub use zindex::{HandleId, Layer, RegisterOptions, Stackable, ZIndexAllocator};
