//! The FlyoutCoordinator moves panels between docks and floating chrome.

mod chrome;
mod content;
mod execute;
mod pointer;
mod restore;
mod transitions;
mod types;

pub use chrome::*;
pub use content::*;
pub use types::{FlyoutCoordinator, FlyoutOptions};
