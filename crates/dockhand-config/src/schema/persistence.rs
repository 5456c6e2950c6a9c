//! Panel layout persistence settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    pub enabled: bool,
    /// Save after every committed transition, not only on explicit save-all.
    pub save_on_transition: bool,
    /// Override for the state file; defaults to the platform data directory.
    pub state_file: Option<String>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            save_on_transition: true,
            state_file: None,
        }
    }
}
