//! Master identity entries as declared in configuration.

use serde::{Deserialize, Serialize};

/// One operator identity from `vault.toml`. Exactly one of `secret` or
/// `secret_sha256` must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_sha256: Option<String>,
}
