//! Vault configuration file model.

use crate::models::identity::IdentityEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultFile {
    #[serde(default)]
    pub vault: VaultSection,
    #[serde(default)]
    pub identity: Vec<IdentityEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultSection {
    /// Credential store path; relative paths join the vault root.
    #[serde(default)]
    pub store_path: Option<String>,
    /// Audit log path; relative paths join the vault root.
    #[serde(default)]
    pub log_path: Option<String>,
}
