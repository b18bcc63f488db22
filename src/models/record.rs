//! Stored domain/secret records and their line encoding.

use crate::constants;

/// One stored domain/secret pair. Records are append-only: a second `add`
/// for the same domain produces a second record, never an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub domain: String,
    pub secret: String,
}

impl CredentialRecord {
    pub fn new(domain: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            secret: secret.into(),
        }
    }

    /// Encode as one store line: `<domain> | <secret>`.
    pub fn to_line(&self) -> String {
        format!(
            "{}{}{}",
            self.domain,
            constants::RECORD_DELIMITER,
            self.secret
        )
    }

    /// Decode a store line. Returns `None` when the delimiter is missing.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (domain, secret) = line.split_once(constants::RECORD_DELIMITER)?;
        Some(Self {
            domain: domain.to_string(),
            secret: secret.to_string(),
        })
    }
}
