//! Interactive session command handler.

use crate::cli::CliContext;
use crate::core::session::{Session, SessionConfig, SessionOutcome};
use anyhow::{bail, Result};
use std::io;

pub fn run(ctx: CliContext) -> Result<()> {
    let config = SessionConfig {
        store_path: ctx.paths.store.clone(),
        log_path: ctx.paths.log.clone(),
        identities: ctx.identities,
        hidden_prompts: !ctx.non_interactive,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = Session::new(config, stdin.lock(), stdout.lock()).run()?;

    match outcome {
        SessionOutcome::Completed => Ok(()),
        SessionOutcome::Denied => bail!("authentication failed: access denied"),
    }
}
