//! Compiled input validators for the collector.
//!
//! Two fields are validated during collection: email and phone. The
//! patterns are compiled once per collector and reused across the retry
//! loops.

use crate::error::{ResumakeError, Result};
use regex::Regex;

/// Local part is one-or-more word/`.`/`_`/`%`/`+`/`-` characters, domain is
/// one-or-more word/`.`/`-` characters, final label is 2+ alphabetic.
const EMAIL_PATTERN: &str = r"^[\w._%+-]+@[\w.-]+\.[A-Za-z]{2,}$";

/// Exactly 10 decimal digits, no separators, no country code.
const PHONE_PATTERN: &str = r"^\d{10}$";

/// Which validated field a pattern guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    Email,
    Phone,
}

impl ValidatorKind {
    /// Message shown when input is rejected, before re-prompting.
    pub fn rejection_message(&self) -> &'static str {
        match self {
            ValidatorKind::Email => "Invalid email format. Please enter again.",
            ValidatorKind::Phone => "Invalid phone number. Please enter exactly 10 digits.",
        }
    }
}

/// Compiled validation patterns.
pub struct Validators {
    email: Regex,
    phone: Regex,
}

impl std::fmt::Debug for Validators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validators")
            .field("email", &EMAIL_PATTERN)
            .field("phone", &PHONE_PATTERN)
            .finish()
    }
}

impl Validators {
    /// Compile the fixed validation patterns.
    pub fn compile() -> Result<Self> {
        Ok(Self {
            email: compile_pattern(EMAIL_PATTERN)?,
            phone: compile_pattern(PHONE_PATTERN)?,
        })
    }

    /// Check whether the trimmed input satisfies the given validator.
    pub fn accepts(&self, kind: ValidatorKind, input: &str) -> bool {
        match kind {
            ValidatorKind::Email => self.email.is_match(input),
            ValidatorKind::Phone => self.phone.is_match(input),
        }
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        ResumakeError::UserError(format!("invalid validator pattern '{}': {}", pattern, e))
    })
}
