//! SMTP relay configuration.

use std::time::Duration;

/// Default relay host.
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default per-connection timeout in seconds.
const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 20;

/// Configuration for the SMTP relay.
///
/// Credentials are optional here so the service can start without them;
/// [`crate::SmtpMailer`] reports their absence on each send.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port (defaults to 587).
    pub port: u16,
    /// SMTP username; also the sender address unless `from_address` is set.
    pub user: Option<String>,
    /// SMTP password.
    pub password: Option<String>,
    /// RFC 5322 "From" address override.
    pub from_address: Option<String>,
    /// Connection and command timeout.
    pub timeout: Duration,
}

impl SmtpConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable            | Default          |
    /// |---------------------|------------------|
    /// | `SMTP_HOST`         | `smtp.gmail.com` |
    /// | `SMTP_PORT`         | `587`            |
    /// | `SMTP_USER`         | (none)           |
    /// | `SMTP_PASS`         | (none)           |
    /// | `SMTP_FROM`         | `SMTP_USER`      |
    /// | `SMTP_TIMEOUT_SECS` | `20`             |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            port: get("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            user: get("SMTP_USER"),
            password: get("SMTP_PASS"),
            from_address: get("SMTP_FROM"),
            timeout: Duration::from_secs(
                get("SMTP_TIMEOUT_SECS")
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(DEFAULT_SMTP_TIMEOUT_SECS),
            ),
        }
    }

    /// Username and password, if both are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.user, &self.password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }

    /// Sender address: `from_address` if set, otherwise the SMTP user.
    pub fn sender(&self) -> Option<&str> {
        self.from_address.as_deref().or(self.user.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> SmtpConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SmtpConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.host, "smtp.gmail.com");
        assert_eq!(config.port, 587);
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert!(config.credentials().is_none());
        assert!(config.sender().is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            ("SMTP_HOST", "relay.example.com"),
            ("SMTP_PORT", "2525"),
            ("SMTP_USER", "bot@example.com"),
            ("SMTP_PASS", "hunter2"),
            ("SMTP_TIMEOUT_SECS", "5"),
        ]);
        assert_eq!(config.host, "relay.example.com");
        assert_eq!(config.port, 2525);
        assert_eq!(config.credentials(), Some(("bot@example.com", "hunter2")));
        assert_eq!(config.sender(), Some("bot@example.com"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        let config = config_from(&[("SMTP_PORT", "smtp")]);
        assert_eq!(config.port, 587);
    }

    #[test]
    fn empty_credentials_count_as_missing() {
        let config = config_from(&[("SMTP_USER", "bot@example.com"), ("SMTP_PASS", "")]);
        assert!(config.credentials().is_none());
    }

    #[test]
    fn from_address_overrides_user_as_sender() {
        let config = config_from(&[
            ("SMTP_USER", "apikey"),
            ("SMTP_PASS", "secret"),
            ("SMTP_FROM", "noreply@clario.app"),
        ]);
        assert_eq!(config.sender(), Some("noreply@clario.app"));
    }
}
