//! CLI routing and command dispatch.

use crate::core::config;
use crate::core::identity::IdentityProvider;
use crate::core::paths::VaultPaths;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod generate;
pub mod session;

/// Shared context passed to command handlers.
pub struct CliContext {
    pub paths: VaultPaths,
    pub identities: IdentityProvider,
    pub non_interactive: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "sphere-vault",
    version,
    about = "Local single-operator credential vault"
)]
pub struct Cli {
    /// Vault root directory (default: current directory)
    #[arg(long, global = true, value_name = "PATH", env = "SPHERE_VAULT_ROOT")]
    pub root: Option<PathBuf>,

    /// Credential store file, overriding the configured path
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Audit log file, overriding the configured path
    #[arg(long, global = true, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Run in non-interactive mode (plain line input, no hidden prompts)
    #[arg(long, global = true, env = "SPHERE_VAULT_NON_INTERACTIVE")]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut paths = VaultPaths::resolve(self.root)?;

        let config = config::load(&paths.config)?;
        if let Some(store) = config.vault.store_path.as_deref() {
            paths = paths.with_store(std::path::Path::new(store));
        }
        if let Some(log) = config.vault.log_path.as_deref() {
            paths = paths.with_log(std::path::Path::new(log));
        }
        // CLI flags win over the config file.
        if let Some(store) = self.store {
            paths = paths.with_store(&store);
        }
        if let Some(log) = self.log {
            paths = paths.with_log(&log);
        }

        let identities = if config.identity.is_empty() {
            IdentityProvider::master_default()
        } else {
            IdentityProvider::from_entries(&config.identity)?
        };

        let ctx = CliContext {
            paths,
            identities,
            non_interactive: self.non_interactive,
        };

        match self.command.unwrap_or(Commands::Session) {
            Commands::Session => session::run(ctx),
            Commands::Generate(args) => generate::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive vault session (the default)
    Session,
    /// Generate a random secret and print it
    Generate(generate::GenerateArgs),
}
