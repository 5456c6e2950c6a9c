pub mod actions;
pub mod errors;
pub mod id;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, DockhandError, FlyoutError, PersistError};
pub use id::{new_correlation_id, SessionId};
pub use types::{PanelId, Placement, Point, Rect, Size};

pub type Result<T> = std::result::Result<T, DockhandError>;
