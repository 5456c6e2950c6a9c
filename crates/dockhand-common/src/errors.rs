use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("persistence io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot serialization error: {0}")]
    Serialize(String),

    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    #[error("no state directory available")]
    NoStateDir,
}

/// Recoverable failures of the flyout/dock core.
///
/// The public event-facing API logs these and returns a falsy value instead
/// of propagating, so a stale pointer or menu event never takes the host down.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlyoutError {
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("z-index {requested} exceeds layer {layer} max {max}")]
    BoundsOverflow {
        layer: String,
        requested: i64,
        max: i32,
    },

    #[error("content for panel {panel} failed to mount: {reason}")]
    ContentMountFailure { panel: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum DockhandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Flyout(#[from] FlyoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("zindex.front_gap = 2".into());
        assert_eq!(
            err.to_string(),
            "config validation error: zindex.front_gap = 2"
        );
    }

    #[test]
    fn flyout_error_display() {
        let err = FlyoutError::InvalidTarget("panel notes".into());
        assert_eq!(err.to_string(), "invalid target: panel notes");

        let err = FlyoutError::BoundsOverflow {
            layer: "BASE".into(),
            requested: 150,
            max: 99,
        };
        assert_eq!(err.to_string(), "z-index 150 exceeds layer BASE max 99");

        let err = FlyoutError::ContentMountFailure {
            panel: "notes".into(),
            reason: "renderer panicked".into(),
        };
        assert!(err.to_string().contains("notes"));
        assert!(err.to_string().contains("renderer panicked"));
    }

    #[test]
    fn persist_error_display() {
        let err = PersistError::UnsupportedVersion(7);
        assert_eq!(err.to_string(), "unsupported snapshot version: 7");

        let err = PersistError::Io {
            path: PathBuf::from("/tmp/panels.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/panels.json"));
    }

    #[test]
    fn dockhand_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: DockhandError = config_err.into();
        assert!(matches!(err, DockhandError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn dockhand_error_from_flyout() {
        let err: DockhandError = FlyoutError::InvalidState("already floating".into()).into();
        assert!(matches!(err, DockhandError::Flyout(_)));
        assert_eq!(err.to_string(), "invalid state: already floating");
    }

    #[test]
    fn dockhand_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DockhandError = io_err.into();
        assert!(matches!(err, DockhandError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
