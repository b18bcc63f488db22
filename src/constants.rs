//! Centralized constants for file names, defaults, and permissions.

/// Default file name of the credential store inside the vault root.
pub const STORE_FILE: &str = "passwords.txt";

/// Default file name of the append-only audit log inside the vault root.
pub const LOG_FILE: &str = "logs.txt";

/// Optional configuration file inside the vault root.
pub const CONFIG_FILE: &str = "vault.toml";

/// Master identity used when no configuration overrides it.
pub const DEFAULT_MASTER_NAME: &str = "admin";

/// Master secret used when no configuration overrides it.
pub const DEFAULT_MASTER_SECRET: &str = "SecureSphere2026";

/// Default length for auto-generated secrets.
pub const DEFAULT_SECRET_LENGTH: usize = 12;

/// Delimiter between domain and secret in a store line.
pub const RECORD_DELIMITER: &str = " | ";

/// Character pool for generated secrets: uppercase, lowercase, digits, and
/// the full ASCII punctuation class.
pub const SECRET_POOL: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Permission mode for the credential store file.
pub const STORE_FILE_MODE: u32 = 0o600;

/// Permission mode for the audit log.
pub const AUDIT_LOG_MODE: u32 = 0o640;
