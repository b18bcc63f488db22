//! Append-only audit trail.
//!
//! One line per recorded action, `USER: <actor> | ACTION: <action>`. The
//! program only ever appends; the log is read by operators, not by the
//! vault itself.

use crate::constants;
use crate::util::fs as vault_fs;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Append one actor/action entry, creating the log if absent. A failure
/// here means the action would be unattributable, so callers treat it as
/// fatal rather than pretending the record was written.
pub fn record(log_path: &Path, actor: &str, action: &str) -> Result<()> {
    vault_fs::ensure_parent(log_path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("open audit log {}", log_path.display()))?;
    writeln!(file, "USER: {} | ACTION: {}", actor, action)
        .with_context(|| format!("append to audit log {}", log_path.display()))?;
    vault_fs::set_permissions(log_path, constants::AUDIT_LOG_MODE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_record_creates_and_formats_line() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("logs.txt");
        record(&log, "admin", "Logged in successfully").unwrap();
        let content = fs::read_to_string(&log).unwrap();
        assert_eq!(content, "USER: admin | ACTION: Logged in successfully\n");
    }

    #[test]
    fn test_record_appends_in_call_order() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("logs.txt");
        record(&log, "admin", "Logged in successfully").unwrap();
        record(&log, "admin", "Added password for GitHub").unwrap();
        record(&log, "admin", "Logged out").unwrap();
        let content = fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("Logged in successfully"));
        assert!(lines[1].ends_with("Added password for GitHub"));
        assert!(lines[2].ends_with("Logged out"));
    }

    #[test]
    fn test_record_unwritable_target_is_error() {
        let dir = TempDir::new().unwrap();
        // A directory at the log path cannot be opened for append.
        let log = dir.path().join("logs.txt");
        fs::create_dir(&log).unwrap();
        assert!(record(&log, "admin", "Logged out").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_audit_log_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("logs.txt");
        record(&log, "admin", "Logged out").unwrap();
        let mode = fs::metadata(&log).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }
}
