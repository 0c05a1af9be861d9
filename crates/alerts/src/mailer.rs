//! SMTP delivery of alert emails.

use crate::message::{render_alert, AlertMessage};
use chrono::{DateTime, Utc};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use pricewatch_core::AlertDecision;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// SMTP transport settings.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    /// Relay host (e.g., "smtp.gmail.com")
    pub host: String,
    /// STARTTLS port
    pub port: u16,
    /// Login username, usually the sender address
    pub username: String,
    /// Login password or app password
    pub password: String,
    /// Sender address for the From header
    pub from: String,
}

/// Alert mailer: one outbound email per (decision, recipient) pair.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    hostname: String,
}

impl Mailer {
    /// Create a mailer over a STARTTLS relay.
    pub fn new(settings: &SmtpSettings) -> Result<Self, AlertError> {
        let from: Mailbox = settings.from.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        Ok(Self {
            transport,
            from,
            hostname,
        })
    }

    /// Deliver one decision to every recipient, best-effort.
    ///
    /// `evaluated_at` is the timestamp of the evaluation pass that produced
    /// the decision; every alert from the same pass carries the same one.
    /// A failure for one recipient is logged and does not prevent
    /// attempting the rest. Returns the number of successful deliveries.
    pub async fn send_alert(
        &self,
        decision: &AlertDecision,
        recipients: &[String],
        evaluated_at: DateTime<Utc>,
    ) -> u32 {
        if recipients.is_empty() {
            warn!("No recipients configured, alert not emailed");
            return 0;
        }

        let message = render_alert(decision, evaluated_at, &self.hostname);
        let mut sent = 0u32;

        for recipient in recipients {
            match self.send_to(recipient, &message).await {
                Ok(()) => {
                    info!(
                        recipient = %recipient,
                        asset = %decision.id,
                        direction = %decision.direction,
                        "Alert email sent"
                    );
                    sent += 1;
                }
                Err(e) => {
                    error!(recipient = %recipient, error = %e, "Failed to send alert email");
                }
            }
        }

        sent
    }

    async fn send_to(&self, recipient: &str, message: &AlertMessage) -> Result<(), AlertError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(recipient.parse()?)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())?;

        self.transport.send(email).await?;
        Ok(())
    }
}
