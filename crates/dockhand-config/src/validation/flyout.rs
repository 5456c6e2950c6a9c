//! Flyout geometry validation (defaults, cascade, resize floor).

use crate::schema::DockhandConfig;

use super::helpers::validate_range_f64;

/// Validate all flyout-related constraints.
pub(crate) fn validate_flyout(errors: &mut Vec<String>, config: &DockhandConfig) {
    let flyout = &config.flyout;
    validate_range_f64(errors, "flyout.default_width", flyout.default_width, 100.0, 8000.0);
    validate_range_f64(
        errors,
        "flyout.default_height",
        flyout.default_height,
        100.0,
        8000.0,
    );
    validate_range_f64(errors, "flyout.cascade_offset", flyout.cascade_offset, 0.0, 200.0);
    validate_range_f64(errors, "flyout.min_width", flyout.min_width, 50.0, 2000.0);
    validate_range_f64(errors, "flyout.min_height", flyout.min_height, 50.0, 2000.0);

    if flyout.default_width < flyout.min_width {
        errors.push(format!(
            "flyout.default_width = {} is below flyout.min_width = {}",
            flyout.default_width, flyout.min_width
        ));
    }
    if flyout.default_height < flyout.min_height {
        errors.push(format!(
            "flyout.default_height = {} is below flyout.min_height = {}",
            flyout.default_height, flyout.min_height
        ));
    }
}
