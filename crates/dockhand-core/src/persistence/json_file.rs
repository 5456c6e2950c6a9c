//! Snapshot persistence as a pretty-printed JSON file, written atomically.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dockhand_common::PersistError;
use tracing::debug;

use super::StatePersistence;
use crate::store::{StoreSnapshot, SNAPSHOT_VERSION};

#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the platform state path (`~/.local/share/dockhand/panels.json`).
    pub fn at_default_path() -> Result<Self, PersistError> {
        let path = dockhand_config::default_state_path().ok_or(PersistError::NoStateDir)?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistError {
        PersistError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StatePersistence for JsonFilePersistence {
    fn save(&mut self, snapshot: &StoreSnapshot) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| PersistError::Serialize(e.to_string()))?;

        dockhand_config::write_atomic(&self.path, &json).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), panels = snapshot.panels.len(), "panel state saved");
        Ok(())
    }

    fn restore(&mut self) -> Result<Option<StoreSnapshot>, PersistError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved panel state");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let snapshot: StoreSnapshot = serde_json::from_str(&contents)
            .map_err(|e| PersistError::Serialize(format!("{}: {e}", self.path.display())))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistError::UnsupportedVersion(snapshot.version));
        }
        Ok(Some(snapshot))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
