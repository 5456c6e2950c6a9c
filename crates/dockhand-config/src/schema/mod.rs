//! Configuration schema types for Dockhand.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching built-in behavior.

mod flyout;
mod persistence;
mod system;
mod zindex;

pub use flyout::*;
pub use persistence::*;
pub use system::*;
pub use zindex::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Dockhand.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct DockhandConfig {
    pub zindex: ZIndexConfig,
    pub flyout: FlyoutConfig,
    pub persistence: PersistenceConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_sections() {
        let config = DockhandConfig::default();
        assert_eq!(config.zindex.front_gap, 10);
        assert!(config.persistence.enabled);
        assert!(config.persistence.save_on_transition);
        assert!(config.persistence.state_file.is_none());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: DockhandConfig = toml::from_str("").unwrap();
        assert_eq!(config.zindex.front_gap, 10);
        assert!((config.flyout.default_x - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: DockhandConfig = toml::from_str(
            r#"
[logging]
level = "WARNING"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Warning);
        assert_eq!(config.logging.level.as_directive(), "warn");
    }

    #[test]
    fn persistence_state_file_override() {
        let config: DockhandConfig = toml::from_str(
            r#"
[persistence]
state_file = "/tmp/panels.json"
save_on_transition = false
"#,
        )
        .unwrap();
        assert_eq!(
            config.persistence.state_file.as_deref(),
            Some("/tmp/panels.json")
        );
        assert!(!config.persistence.save_on_transition);
        assert!(config.persistence.enabled);
    }
}
