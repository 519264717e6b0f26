//! Application Configuration
//!
//! Configuration for the Auth application layer. Constructed once at
//! startup from the environment and never mutated afterwards.

use std::time::Duration;

use platform::token::TokenSigner;
use thiserror::Error;

/// Default access-token lifetime string
pub const DEFAULT_ACCESS_EXPIRES_IN: &str = "15m";

/// Default refresh-token lifetime string
pub const DEFAULT_REFRESH_EXPIRES_IN: &str = "7d";

/// Lifetime string parse errors (`"15m"`, `"7d"`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifetimeParseError {
    #[error("Lifetime cannot be empty")]
    Empty,

    #[error("Invalid lifetime `{0}`: expected digits plus an optional s/m/h/d suffix")]
    Malformed(String),
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret for signing access tokens
    pub access_secret: String,
    /// Independent secret for signing refresh tokens
    pub refresh_secret: String,
    /// Access-token lifetime
    pub access_ttl: Duration,
    /// Refresh-token lifetime; also stamps the stored row's expiry
    pub refresh_ttl: Duration,
    /// The configured access lifetime string, echoed in responses as `expiresIn`
    pub access_expires_in: String,
}

impl AuthConfig {
    /// Build from the raw secrets and lifetime strings
    pub fn new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
        access_expires_in: &str,
        refresh_expires_in: &str,
    ) -> Result<Self, LifetimeParseError> {
        Ok(Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl: parse_lifetime(access_expires_in)?,
            refresh_ttl: parse_lifetime(refresh_expires_in)?,
            access_expires_in: access_expires_in.to_string(),
        })
    }

    /// Create config for development (fixed lifetimes, throwaway secrets)
    pub fn development() -> Self {
        Self {
            access_secret: "dev-access-secret".to_string(),
            refresh_secret: "dev-refresh-secret".to_string(),
            access_ttl: Duration::from_secs(15 * 60),
            refresh_ttl: Duration::from_secs(7 * 24 * 3600),
            access_expires_in: DEFAULT_ACCESS_EXPIRES_IN.to_string(),
        }
    }

    /// Build the token signer for this configuration
    pub fn signer(&self) -> TokenSigner {
        TokenSigner::new(
            &self.access_secret,
            &self.refresh_secret,
            self.access_ttl,
            self.refresh_ttl,
        )
    }
}

/// Parse a lifetime string: digits plus an optional `s`/`m`/`h`/`d` suffix.
/// A bare number is seconds.
pub fn parse_lifetime(s: &str) -> Result<Duration, LifetimeParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(LifetimeParseError::Empty);
    }

    let (digits, multiplier) = match s.as_bytes()[s.len() - 1] {
        b's' => (&s[..s.len() - 1], 1u64),
        b'm' => (&s[..s.len() - 1], 60),
        b'h' => (&s[..s.len() - 1], 3600),
        b'd' => (&s[..s.len() - 1], 24 * 3600),
        b'0'..=b'9' => (s, 1),
        _ => return Err(LifetimeParseError::Malformed(s.to_string())),
    };

    let value: u64 = digits
        .parse()
        .map_err(|_| LifetimeParseError::Malformed(s.to_string()))?;
    if value == 0 {
        return Err(LifetimeParseError::Malformed(s.to_string()));
    }

    Ok(Duration::from_secs(value * multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lifetime_suffixes() {
        assert_eq!(parse_lifetime("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_lifetime("15m").unwrap(), Duration::from_secs(900));
        assert_eq!(parse_lifetime("12h").unwrap(), Duration::from_secs(43200));
        assert_eq!(parse_lifetime("7d").unwrap(), Duration::from_secs(604800));
    }

    #[test]
    fn test_parse_lifetime_bare_seconds() {
        assert_eq!(parse_lifetime("90").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_parse_lifetime_rejects_garbage() {
        assert!(parse_lifetime("").is_err());
        assert!(parse_lifetime("m").is_err());
        assert!(parse_lifetime("15x").is_err());
        assert!(parse_lifetime("fifteen minutes").is_err());
        assert!(parse_lifetime("0m").is_err());
    }

    #[test]
    fn test_config_from_lifetime_strings() {
        let config = AuthConfig::new("a", "r", "15m", "7d").unwrap();
        assert_eq!(config.access_ttl, Duration::from_secs(900));
        assert_eq!(config.refresh_ttl, Duration::from_secs(604800));
        assert_eq!(config.access_expires_in, "15m");
    }
}
