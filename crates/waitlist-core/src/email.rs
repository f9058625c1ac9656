//! Email Validation
//!
//! Shape check only: `local@domain.tld`, no whitespace or extra `@` in any
//! part. Deliverability is the relay's problem.
//!
//! The byte-order mark (U+FEFF) counts as whitespace, both when trimming and
//! inside the pattern, so a pasted BOM is handled like a stray space.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WaitlistError};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("email pattern is a valid regex")
});

/// A trimmed email address that passed the shape check
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    /// Trim and validate raw input
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim_matches(is_blank);
        if is_valid_shape(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(WaitlistError::InvalidEmailFormat(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Whether the whole string matches `local@domain.tld`
pub fn is_valid_shape(candidate: &str) -> bool {
    EMAIL_SHAPE.is_match(candidate)
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WaitlistEmail {
    type Error = WaitlistError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<WaitlistEmail> for String {
    fn from(email: WaitlistEmail) -> Self {
        email.0
    }
}
