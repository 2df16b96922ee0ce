//! Newsletter email validation.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

/// One `@`, no whitespace, and a dotted domain segment.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("email address is empty")]
    Empty,
    #[error("email address is malformed: {0}")]
    Malformed(String),
}

/// `None` only if the pattern fails to compile, in which case nothing validates.
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Trim `raw` and return the address if it passes [`is_valid_email`].
///
/// # Errors
///
/// Returns [`EmailError::Empty`] for blank input and
/// [`EmailError::Malformed`] when the pattern does not match.
pub fn validate_email(raw: &str) -> Result<&str, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !is_valid_email(email) {
        return Err(EmailError::Malformed(email.to_owned()));
    }
    Ok(email)
}
