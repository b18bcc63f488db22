//! Vault path resolution.

use crate::constants;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved locations of the vault's durable targets.
#[derive(Debug, Clone)]
pub struct VaultPaths {
    pub root: PathBuf,
    pub store: PathBuf,
    pub log: PathBuf,
    pub config: PathBuf,
}

impl VaultPaths {
    /// Resolve vault paths from CLI arg, env var, or the current directory.
    pub fn resolve(root_arg: Option<PathBuf>) -> Result<Self> {
        if let Some(root) = root_arg {
            return Ok(Self::from_root(root));
        }
        if let Ok(root) = env::var("SPHERE_VAULT_ROOT") {
            if !root.is_empty() {
                return Ok(Self::from_root(PathBuf::from(root)));
            }
        }
        let cwd = env::current_dir().context("resolve current directory")?;
        Ok(Self::from_root(cwd))
    }

    /// Create vault paths from a root directory.
    pub fn from_root(root: PathBuf) -> Self {
        let store = root.join(constants::STORE_FILE);
        let log = root.join(constants::LOG_FILE);
        let config = root.join(constants::CONFIG_FILE);
        Self {
            root,
            store,
            log,
            config,
        }
    }

    /// Replace the store path; relative paths join the root.
    pub fn with_store(mut self, store: &Path) -> Self {
        self.store = self.root.join(store);
        self
    }

    /// Replace the log path; relative paths join the root.
    pub fn with_log(mut self, log: &Path) -> Self {
        self.log = self.root.join(log);
        self
    }
}

impl std::fmt::Display for VaultPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vault@{}", self.root.display())
    }
}
