//! Outbound email for Clario.
//!
//! [`Mailer`] is the seam handlers depend on; [`SmtpMailer`] is the
//! production implementation, relaying through an SMTP server with STARTTLS.
//! Each call to [`Mailer::send`] makes exactly one delivery attempt.

pub mod config;
pub mod error;
pub mod smtp;

pub use config::SmtpConfig;
pub use error::MailError;
pub use smtp::SmtpMailer;

/// A fully addressed plain-text message, minus the sender.
///
/// The sender is a property of the transport, not of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Sends one email per call. No retry, no queue.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}
