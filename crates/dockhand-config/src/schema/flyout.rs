//! Floating window geometry and chrome configuration types.

use serde::{Deserialize, Serialize};

/// Flyout defaults and interaction limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyoutConfig {
    /// Default left edge of a new flyout in pixels.
    pub default_x: f64,
    /// Default top edge of a new flyout in pixels.
    pub default_y: f64,
    /// Default flyout width in pixels (valid range: 100-8000).
    pub default_width: f64,
    /// Default flyout height in pixels (valid range: 100-8000).
    pub default_height: f64,
    /// Offset applied per already-open flyout so defaults do not stack
    /// exactly on top of each other (valid range: 0-200).
    pub cascade_offset: f64,
    /// Resize floor width in pixels (valid range: 50-2000).
    pub min_width: f64,
    /// Resize floor height in pixels (valid range: 50-2000).
    pub min_height: f64,
    /// Whether floating chrome gets a resize handle.
    pub resize_handle: bool,
    /// Bring a closed flyout to the front of its layer when it is shown again.
    pub focus_on_show: bool,
}

impl Default for FlyoutConfig {
    fn default() -> Self {
        Self {
            default_x: 120.0,
            default_y: 80.0,
            default_width: 480.0,
            default_height: 360.0,
            cascade_offset: 24.0,
            min_width: 200.0,
            min_height: 150.0,
            resize_handle: true,
            focus_on_show: true,
        }
    }
}
