//! Where descriptor snapshots are saved between runs.

mod json_file;
mod memory;

pub use json_file::JsonFilePersistence;
pub use memory::MemoryPersistence;

use dockhand_common::PersistError;

use crate::store::StoreSnapshot;

/// Storage backend for the descriptor store.
///
/// `restore` returns `Ok(None)` when nothing has been saved yet.
pub trait StatePersistence {
    fn save(&mut self, snapshot: &StoreSnapshot) -> Result<(), PersistError>;
    fn restore(&mut self) -> Result<Option<StoreSnapshot>, PersistError>;

    /// Human-readable location, for log lines.
    fn describe(&self) -> String {
        "custom".to_string()
    }
}
