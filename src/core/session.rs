//! Interactive session state machine.
//!
//! Drives one authenticated operator through the command loop, dispatching
//! to the credential store and secret generator and recording every action
//! in the audit trail. The loop reads from an injected `BufRead` and writes
//! to an injected `Write` so it can be exercised without a terminal.

use crate::constants;
use crate::core::identity::IdentityProvider;
use crate::core::{audit, generator, store};
use crate::models::record::CredentialRecord;
use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use dialoguer::Password;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use zeroize::Zeroizing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
    Terminated,
}

/// How a finished session ended. Denied sessions never enter the command
/// loop and leave the audit trail untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    Denied,
}

pub struct SessionConfig {
    pub store_path: PathBuf,
    pub log_path: PathBuf,
    pub identities: IdentityProvider,
    /// Read secrets with hidden input from the controlling terminal. Off in
    /// non-interactive mode, where secrets arrive as plain input lines.
    pub hidden_prompts: bool,
}

pub struct Session<R, W> {
    config: SessionConfig,
    input: R,
    out: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: SessionConfig, input: R, out: W) -> Self {
        Self {
            config,
            input,
            out,
            state: SessionState::Unauthenticated,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Authenticate once, then run the command loop until `exit`.
    ///
    /// Store failures are reported and the loop continues; audit failures
    /// propagate because an unrecorded action would be unattributable.
    pub fn run(mut self) -> Result<SessionOutcome> {
        self.banner()?;

        let name = self.prompt("Username")?;
        let secret = self.prompt_secret("Master Password")?;
        if !self.config.identities.verify(&name, &secret) {
            return Ok(SessionOutcome::Denied);
        }
        drop(secret);

        self.state = SessionState::Authenticated;
        writeln!(self.out, "\n[+] Welcome, {}. Access granted.", name)?;
        self.audit(&name, "Logged in successfully")?;

        loop {
            self.menu()?;
            let choice = self.prompt("Select an option")?;
            match choice.trim() {
                "1" | "add" => self.cmd_add(&name)?,
                "2" | "list" | "view" => self.cmd_list(&name)?,
                "9" | "exit" => {
                    writeln!(self.out, "\n[!] Exiting. Stored entries remain on disk.")?;
                    self.audit(&name, "Logged out")?;
                    self.state = SessionState::Terminated;
                    return Ok(SessionOutcome::Completed);
                }
                other => {
                    writeln!(self.out, "[X] Invalid choice '{}'. Try again.", other)?;
                }
            }
        }
    }

    fn cmd_add(&mut self, actor: &str) -> Result<()> {
        let domain = self.prompt("Enter the domain name (e.g., GitHub)")?;
        let entered = self.prompt_secret("Enter password (leave blank to auto-generate)")?;
        let secret = if entered.is_empty() {
            let generated =
                Zeroizing::new(generator::generate(constants::DEFAULT_SECRET_LENGTH));
            writeln!(self.out, "[*] Generated secure password: {}", *generated)?;
            generated
        } else {
            entered
        };

        let record = CredentialRecord::new(domain, secret.as_str());
        if let Err(e) = store::add(&self.config.store_path, &record) {
            writeln!(self.out, "[X] Could not save password: {:#}", e)?;
            return Ok(());
        }
        writeln!(self.out, "[!] Saved password for {}.", record.domain)?;
        self.audit(actor, &format!("Added password for {}", record.domain))
    }

    fn cmd_list(&mut self, actor: &str) -> Result<()> {
        let records = match store::list_all(&self.config.store_path) {
            Ok(records) => records,
            Err(e) => {
                writeln!(self.out, "[X] Could not read stored passwords: {:#}", e)?;
                return Ok(());
            }
        };

        if records.is_empty() {
            writeln!(self.out, "No passwords stored yet.")?;
        } else {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec![
                Cell::new("Domain").add_attribute(Attribute::Bold),
                Cell::new("Password").add_attribute(Attribute::Bold),
            ]);
            for record in &records {
                table.add_row(vec![record.domain.clone(), record.secret.clone()]);
            }
            writeln!(self.out, "{}", table)?;
        }
        self.audit(actor, "Retrieved all passwords")
    }

    fn audit(&mut self, actor: &str, action: &str) -> Result<()> {
        audit::record(&self.config.log_path, actor, action).context("audit log unavailable")
    }

    fn banner(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "=".repeat(44))?;
        writeln!(self.out, "  SPHERE VAULT - LOCAL CREDENTIAL STORE")?;
        writeln!(self.out, "{}", "=".repeat(44))?;
        Ok(())
    }

    fn menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n+{}+", "-".repeat(38))?;
        writeln!(self.out, "| 1. Add new password                  |")?;
        writeln!(self.out, "| 2. View all passwords                |")?;
        writeln!(self.out, "| 9. Exit                              |")?;
        writeln!(self.out, "+{}+", "-".repeat(38))?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{}: ", label)?;
        self.out.flush()?;
        self.read_line()
    }

    fn prompt_secret(&mut self, label: &str) -> Result<Zeroizing<String>> {
        if self.config.hidden_prompts {
            return Ok(Zeroizing::new(
                Password::new()
                    .with_prompt(label)
                    .allow_empty_password(true)
                    .interact()
                    .context("read secret from prompt")?,
            ));
        }
        write!(self.out, "{}: ", label)?;
        self.out.flush()?;
        Ok(Zeroizing::new(self.read_line()?))
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("read operator input")?;
        if n == 0 {
            bail!("unexpected end of input");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
