//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod flyout;
mod helpers;
mod misc;


use crate::schema::DockhandConfig;
use dockhand_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DockhandConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_zindex(&mut errors, config);
    flyout::validate_flyout(&mut errors, config);
    misc::validate_persistence(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
