//! Z-index and persistence validation.

use crate::schema::DockhandConfig;

use super::helpers::validate_range;

pub(crate) fn validate_zindex(errors: &mut Vec<String>, config: &DockhandConfig) {
    validate_range(errors, "zindex.front_gap", config.zindex.front_gap, 10, 1000);
}

pub(crate) fn validate_persistence(errors: &mut Vec<String>, config: &DockhandConfig) {
    if let Some(path) = &config.persistence.state_file {
        if path.trim().is_empty() {
            errors.push("persistence.state_file must not be empty when set".into());
        }
    }
}
