//! SMTP delivery via `lettre`.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::error::MailError;
use crate::{Mailer, OutgoingEmail};

/// Sends plain-text email through an SMTP relay using STARTTLS.
///
/// A fresh connection is opened for every message.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn build_message(&self, sender: &str, email: OutgoingEmail) -> Result<Message, MailError> {
        Message::builder()
            .from(sender.parse()?)
            .to(email.to.parse()?)
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let (user, pass) = self
            .config
            .credentials()
            .ok_or(MailError::MissingCredentials)?;
        let sender = self.config.sender().unwrap_or(user);

        let to = email.to.clone();
        let message = self.build_message(sender, email)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
            .port(self.config.port)
            .credentials(Credentials::new(user.to_string(), pass.to_string()))
            .timeout(Some(self.config.timeout))
            .build();

        transport.send(message).await?;

        tracing::info!(to = %to, relay = %self.config.host, "Email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
