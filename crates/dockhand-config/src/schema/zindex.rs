//! Stacking-order allocation settings.

use serde::{Deserialize, Serialize};

/// Z-index allocator configuration.
///
/// The four layer ranges are fixed; only the promotion behavior is tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZIndexConfig {
    /// Amount the layer counter advances on bring-to-front (valid range: 10-1000).
    pub front_gap: u32,
    /// Emit a warning when a requested value is clamped to its layer max.
    pub warn_on_clamp: bool,
}

impl Default for ZIndexConfig {
    fn default() -> Self {
        Self {
            front_gap: 10,
            warn_on_clamp: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zindex_config_defaults() {
        let config = ZIndexConfig::default();
        assert_eq!(config.front_gap, 10);
        assert!(config.warn_on_clamp);
    }

    #[test]
    fn zindex_config_partial_toml() {
        let config: ZIndexConfig = toml::from_str("front_gap = 25").unwrap();
        assert_eq!(config.front_gap, 25);
        assert!(config.warn_on_clamp);
    }
}
