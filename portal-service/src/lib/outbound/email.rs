use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::AsyncSmtpTransport;
use lettre::AsyncTransport;
use lettre::Message;
use lettre::Tokio1Executor;

use crate::config::SmtpConfig;
use crate::user::errors::EmailSenderError;
use crate::user::models::EmailMessage;
use crate::user::ports::EmailSender;

/// SMTP implementation of EmailSender.
///
/// With no username configured the transport connects in the clear and
/// unauthenticated, which is what local development relays such as
/// Mailpit expect. Otherwise it upgrades to STARTTLS and authenticates.
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpEmailSender {
    const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a new SMTP email sender.
    ///
    /// # Arguments
    /// * `config` - Relay host, port, credentials, and sender address
    ///
    /// # Returns
    /// Configured email sender instance
    ///
    /// # Errors
    /// Fails if the relay TLS parameters cannot be set up
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let builder = if config.username.is_empty() {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .context("Failed to configure SMTP relay")?
                .credentials(Credentials::new(
                    config.username.clone(),
                    config.password.clone(),
                ))
        };

        let transport = builder
            .port(config.port)
            .timeout(Some(Self::SMTP_TIMEOUT))
            .build();

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailSenderError> {
        let from: Mailbox = self
            .from_address
            .parse()
            .map_err(|e| EmailSenderError::SendFailed(format!("Invalid sender address: {}", e)))?;
        let to: Mailbox = message
            .to
            .as_str()
            .parse()
            .map_err(|e| EmailSenderError::SendFailed(format!("Invalid recipient: {}", e)))?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(message.html_body.clone())
            .map_err(|e| EmailSenderError::SendFailed(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| EmailSenderError::SendFailed(e.to_string()))?;

        Ok(())
    }
}
