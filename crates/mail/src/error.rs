/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// `SMTP_USER` or `SMTP_PASS` is unset. Reported per send, not at startup.
    #[error("SMTP credentials missing. Set SMTP_USER/SMTP_PASS.")]
    MissingCredentials,

    /// SMTP transport-level failure (connection, TLS, authentication, rejection).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

impl MailError {
    /// Whether the failure comes from local configuration rather than the relay.
    pub fn is_configuration(&self) -> bool {
        matches!(self, MailError::MissingCredentials)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
