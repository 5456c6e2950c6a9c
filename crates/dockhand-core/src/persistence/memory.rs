//! In-process persistence for tests and embedding hosts.

use std::cell::RefCell;
use std::rc::Rc;

use dockhand_common::PersistError;

use super::StatePersistence;
use crate::store::StoreSnapshot;

#[derive(Debug, Default)]
struct Slot {
    snapshot: Option<StoreSnapshot>,
    save_count: u32,
}

/// Keeps the latest snapshot in memory.
///
/// Clones share the same slot, so a test can hand one clone to the
/// coordinator and inspect what was saved through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    slot: Rc<RefCell<Slot>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `snapshot` already saved.
    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        let persistence = Self::new();
        persistence.slot.borrow_mut().snapshot = Some(snapshot);
        persistence
    }

    pub fn saved(&self) -> Option<StoreSnapshot> {
        self.slot.borrow().snapshot.clone()
    }

    pub fn save_count(&self) -> u32 {
        self.slot.borrow().save_count
    }
}

impl StatePersistence for MemoryPersistence {
    fn save(&mut self, snapshot: &StoreSnapshot) -> Result<(), PersistError> {
        let mut slot = self.slot.borrow_mut();
        slot.snapshot = Some(snapshot.clone());
        slot.save_count += 1;
        Ok(())
    }

    fn restore(&mut self) -> Result<Option<StoreSnapshot>, PersistError> {
        Ok(self.slot.borrow().snapshot.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
