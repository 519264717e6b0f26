//! Email Value Object

use std::fmt;

use thiserror::Error;

/// Maximum length per RFC 5321
const MAX_EMAIL_LENGTH: usize = 254;

/// Email validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,

    #[error("Email must be at most {MAX_EMAIL_LENGTH} characters")]
    TooLong,

    #[error("Email format is invalid")]
    Malformed,
}

/// Validated, canonicalized (trimmed + lowercased) email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and canonicalize an email address
    ///
    /// This is intentionally a light syntactic check (single `@`, non-empty
    /// local part, dotted domain) — deliverability is not this layer's
    /// problem. The canonical form is lowercase so the unique index on the
    /// users table is case-insensitive in effect.
    pub fn new(raw: &str) -> Result<Self, EmailError> {
        let canonical = raw.trim().to_lowercase();

        if canonical.is_empty() {
            return Err(EmailError::Empty);
        }
        if canonical.len() > MAX_EMAIL_LENGTH {
            return Err(EmailError::TooLong);
        }

        let (local, domain) = canonical.split_once('@').ok_or(EmailError::Malformed)?;
        if local.is_empty() || domain.is_empty() {
            return Err(EmailError::Malformed);
        }
        if canonical.chars().any(char::is_whitespace) {
            return Err(EmailError::Malformed);
        }
        if domain.contains('@') {
            return Err(EmailError::Malformed);
        }
        // Domain needs at least one dot with content either side
        let mut labels = domain.split('.');
        if !labels.clone().all(|l| !l.is_empty()) || labels.nth(1).is_none() {
            return Err(EmailError::Malformed);
        }

        Ok(Self(canonical))
    }

    /// Reconstruct from a trusted database value
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("Fan@Example.COM").unwrap();
        assert_eq!(email.as_str(), "fan@example.com");
    }

    #[test]
    fn test_trims_whitespace() {
        let email = Email::new("  ace@tennis.net  ").unwrap();
        assert_eq!(email.as_str(), "ace@tennis.net");
    }

    #[test]
    fn test_empty() {
        assert_eq!(Email::new("   "), Err(EmailError::Empty));
    }

    #[test]
    fn test_missing_at() {
        assert_eq!(Email::new("not-an-email"), Err(EmailError::Malformed));
    }

    #[test]
    fn test_empty_parts() {
        assert_eq!(Email::new("@example.com"), Err(EmailError::Malformed));
        assert_eq!(Email::new("fan@"), Err(EmailError::Malformed));
    }

    #[test]
    fn test_undotted_domain() {
        assert_eq!(Email::new("fan@localhost"), Err(EmailError::Malformed));
        assert_eq!(Email::new("fan@example."), Err(EmailError::Malformed));
    }

    #[test]
    fn test_double_at() {
        assert_eq!(Email::new("fan@host@example.com"), Err(EmailError::Malformed));
    }

    #[test]
    fn test_too_long() {
        let raw = format!("{}@example.com", "a".repeat(250));
        assert_eq!(Email::new(&raw), Err(EmailError::TooLong));
    }
}
