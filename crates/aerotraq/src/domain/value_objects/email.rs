//! Email - syntactically checked address

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::domain::errors::DomainError;

// One `@`, no whitespace, at least one `.` after the `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// An email address that passed the `local@domain.tld` shape check.
///
/// No DNS or mailbox verification is performed. Case is preserved, and
/// duplicate lookups compare it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an address, failing with `message` when the shape is wrong.
    pub fn parse(value: String, message: &str) -> Result<Self, DomainError> {
        if EMAIL_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(message))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
