//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Dockhand Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[zindex]
# front_gap = 10           # 10-1000, counter step for bring-to-front
# warn_on_clamp = true

[flyout]
# default_x = 120.0
# default_y = 80.0
# default_width = 480.0    # 100-8000
# default_height = 360.0   # 100-8000
# cascade_offset = 24.0    # 0-200
# min_width = 200.0        # 50-2000, resize floor
# min_height = 150.0       # 50-2000, resize floor
# resize_handle = true
# focus_on_show = true

[persistence]
# enabled = true
# save_on_transition = true
# state_file = "/path/to/panels.json"

[logging]
# level = "INFO"           # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
