//! Append-only credential store backed by a plaintext file.
//!
//! One record per line, `<domain> | <secret>`. Records are never updated or
//! deleted in place; `list_all` returns them in append order.

use crate::constants;
use crate::models::record::CredentialRecord;
use crate::util::fs as vault_fs;
use anyhow::{bail, Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append one record to the store, creating the file if absent.
///
/// Inputs containing the record delimiter or a newline would corrupt the
/// line format on read-back and are rejected before anything is written.
pub fn add(store_path: &Path, record: &CredentialRecord) -> Result<()> {
    validate_field("domain", &record.domain)?;
    validate_field("secret", &record.secret)?;

    vault_fs::ensure_parent(store_path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(store_path)
        .with_context(|| format!("open credential store {}", store_path.display()))?;
    writeln!(file, "{}", record.to_line())
        .with_context(|| format!("append to credential store {}", store_path.display()))?;
    vault_fs::set_permissions(store_path, constants::STORE_FILE_MODE)?;
    Ok(())
}

/// Read all records in insertion order. An absent store is a normal state
/// and yields an empty list; only a genuine read failure is an error.
pub fn list_all(store_path: &Path) -> Result<Vec<CredentialRecord>> {
    if !store_path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(store_path)
        .with_context(|| format!("read credential store {}", store_path.display()))?;

    let mut records = Vec::new();
    let mut malformed = 0usize;
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match CredentialRecord::parse_line(line) {
            Some(record) => records.push(record),
            None => malformed += 1,
        }
    }
    if malformed > 0 {
        eprintln!("warning: {} malformed store lines skipped", malformed);
    }
    Ok(records)
}

fn validate_field(field: &str, value: &str) -> Result<()> {
    if value.contains(constants::RECORD_DELIMITER) {
        bail!(
            "{} must not contain the record delimiter \"{}\"",
            field,
            constants::RECORD_DELIMITER
        );
    }
    if value.contains('\n') || value.contains('\r') {
        bail!("{} must not contain line breaks", field);
    }
    Ok(())
}
