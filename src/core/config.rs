//! Loading of the optional `vault.toml` configuration file.

use crate::models::config::VaultFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load vault configuration. An absent file is the normal case and yields
/// the defaults; a present but unparsable file is an error.
pub fn load(path: &Path) -> Result<VaultFile> {
    if !path.exists() {
        return Ok(VaultFile::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("read vault config {}", path.display()))?;
    let config: VaultFile = toml::from_str(&content)
        .with_context(|| format!("parse vault config {}", path.display()))?;
    Ok(config)
}
