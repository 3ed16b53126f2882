//! Email validation for the hero waitlist form.
//!
//! There is no backend; a valid address only produces a confirmation toast.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    #[error("no email address entered")]
    Empty,
    #[error("`{0}` is not an email address")]
    Malformed(String),
}

/// A trimmed address of the shape `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(raw: &str) -> Result<Self, WaitlistError> {
        let email = raw.trim();
        if email.is_empty() {
            return Err(WaitlistError::Empty);
        }
        if !looks_like_email(email) {
            return Err(WaitlistError::Malformed(email.to_string()));
        }
        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Same shape check browsers apply to `type=email`, minus the exotic parts.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}
