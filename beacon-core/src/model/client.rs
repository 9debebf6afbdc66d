use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque relay-assigned identifier for one attached client.
///
/// The relay mints these from v4 UUIDs, but clients address each other by
/// whatever string they received in `your_id` — the relay never parses an
/// identifier it is handed back, it only uses it as a registry key.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
pub struct ClientId(String);

impl ClientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ClientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
