//! Master identity lookup and verification.

use crate::constants;
use crate::models::identity::IdentityEntry;
use anyhow::{bail, Result};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Expected secret for one identity. The plaintext form is compared
/// byte-exact; the hashed form compares the SHA-256 hex digest of the
/// entered secret.
#[derive(Debug, Clone)]
enum ExpectedSecret {
    Plain(String),
    Sha256(String),
}

/// Immutable name-to-secret table gating access to the session.
#[derive(Debug, Clone)]
pub struct IdentityProvider {
    entries: HashMap<String, ExpectedSecret>,
}

impl IdentityProvider {
    /// Build a provider from configuration entries. Each entry must carry
    /// exactly one secret form.
    pub fn from_entries(entries: &[IdentityEntry]) -> Result<Self> {
        let mut table = HashMap::new();
        for entry in entries {
            if entry.name.is_empty() {
                bail!("identity entry with empty name");
            }
            let expected = match (&entry.secret, &entry.secret_sha256) {
                (Some(secret), None) => ExpectedSecret::Plain(secret.clone()),
                (None, Some(digest)) => {
                    if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                        bail!(
                            "identity '{}': secret_sha256 must be 64 hex characters",
                            entry.name
                        );
                    }
                    ExpectedSecret::Sha256(digest.to_ascii_lowercase())
                }
                (Some(_), Some(_)) => {
                    bail!(
                        "identity '{}': set either secret or secret_sha256, not both",
                        entry.name
                    );
                }
                (None, None) => {
                    bail!("identity '{}': missing secret or secret_sha256", entry.name);
                }
            };
            if table.insert(entry.name.clone(), expected).is_some() {
                bail!("duplicate identity entry '{}'", entry.name);
            }
        }
        if table.is_empty() {
            bail!("identity table is empty");
        }
        Ok(Self { entries: table })
    }

    /// The built-in single master entry used when no config overrides it.
    pub fn master_default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            constants::DEFAULT_MASTER_NAME.to_string(),
            ExpectedSecret::Plain(constants::DEFAULT_MASTER_SECRET.to_string()),
        );
        Self { entries }
    }

    /// Case-sensitive lookup and comparison. Unknown names and secret
    /// mismatches are indistinguishable to the caller.
    pub fn verify(&self, name: &str, secret: &str) -> bool {
        match self.entries.get(name) {
            Some(ExpectedSecret::Plain(expected)) => expected == secret,
            Some(ExpectedSecret::Sha256(expected)) => {
                let digest = Sha256::digest(secret.as_bytes());
                format!("{:x}", digest) == *expected
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, secret: Option<&str>, digest: Option<&str>) -> IdentityEntry {
        IdentityEntry {
            name: name.to_string(),
            secret: secret.map(String::from),
            secret_sha256: digest.map(String::from),
        }
    }

    #[test]
    fn test_master_default_verifies() {
        let provider = IdentityProvider::master_default();
        assert!(provider.verify("admin", "SecureSphere2026"));
    }

    #[test]
    fn test_verify_rejects_wrong_name_or_secret() {
        let provider = IdentityProvider::master_default();
        assert!(!provider.verify("admin", "wrong"));
        assert!(!provider.verify("root", "SecureSphere2026"));
        assert!(!provider.verify("Admin", "SecureSphere2026"));
        assert!(!provider.verify("admin", "securesphere2026"));
    }

    #[test]
    fn test_plain_entry_byte_exact() {
        let provider = IdentityProvider::from_entries(&[entry("op", Some("s3cret"), None)]).unwrap();
        assert!(provider.verify("op", "s3cret"));
        assert!(!provider.verify("op", "s3cret "));
    }

    #[test]
    fn test_sha256_entry_matches_digest_of_input() {
        // sha256("test")
        let digest = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";
        let provider = IdentityProvider::from_entries(&[entry("op", None, Some(digest))]).unwrap();
        assert!(provider.verify("op", "test"));
        assert!(!provider.verify("op", "Test"));
    }

    #[test]
    fn test_sha256_digest_case_insensitive_in_config() {
        let digest = "9F86D081884C7D659A2FEAA0C55AD015A3BF4F1B2B0B822CD15D6C15B0F00A08";
        let provider = IdentityProvider::from_entries(&[entry("op", None, Some(digest))]).unwrap();
        assert!(provider.verify("op", "test"));
    }

    #[test]
    fn test_entry_with_both_forms_rejected() {
        let result = IdentityProvider::from_entries(&[entry("op", Some("a"), Some("b"))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_with_no_secret_rejected() {
        assert!(IdentityProvider::from_entries(&[entry("op", None, None)]).is_err());
    }

    #[test]
    fn test_bad_digest_length_rejected() {
        assert!(IdentityProvider::from_entries(&[entry("op", None, Some("abc123"))]).is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = IdentityProvider::from_entries(&[
            entry("op", Some("a"), None),
            entry("op", Some("b"), None),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(IdentityProvider::from_entries(&[]).is_err());
    }
}
