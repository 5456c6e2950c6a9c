//! Write DockhandConfig to TOML on disk.
//!
//! Writes go to a `.tmp` sibling first and are renamed into place so a crash
//! mid-write never leaves a truncated file. The same helper backs the panel
//! state file.

use std::io;
use std::path::{Path, PathBuf};

use dockhand_common::ConfigError;

use crate::schema::DockhandConfig;
use crate::toml_loader::default_config_path;

/// Write config to the platform default path (`~/.config/dockhand/config.toml`).
pub fn save_config(config: &DockhandConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Write config to a specific path, creating parent directories as needed.
pub fn save_config_to_path(config: &DockhandConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    write_atomic(path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!("failed to write config to {}: {e}", path.display()))
    })?;

    tracing::debug!(path = %path.display(), "Config saved to disk");
    Ok(())
}

/// `<file>.tmp` next to `path`.
pub fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with `contents` via a temporary sibling and a rename,
/// creating parent directories first.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = tmp_path_for(path);
    std::fs::write(&tmp_path, contents)?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!(path = %path.display(), "atomic rename failed ({e}), writing in place");
        std::fs::write(path, contents)?;
        let _ = std::fs::remove_file(&tmp_path);
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
