use serde::{Deserialize, Serialize};
use std::fmt;

/// Short hex id used to correlate log lines of one interaction.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    uuid.as_bytes()[..4]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Identity of a single drag or resize session, e.g. `drag-3f09a1c2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn drag() -> Self {
        Self::with_prefix("drag")
    }

    pub fn resize() -> Self {
        Self::with_prefix("resize")
    }

    fn with_prefix(prefix: &str) -> Self {
        Self(format!("{prefix}-{}", new_correlation_id()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
