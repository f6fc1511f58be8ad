//! Outbound email: the [`Mailer`] seam and its SMTP implementation.

use std::future::Future;

use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::config::SmtpSettings;

pub mod template;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Failed to build email: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// A fully rendered message, ready to hand to a [`Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from_address:     String,
    pub from_name:        String,
    pub recipient:        String,
    pub reply_to_address: String,
    pub reply_to_name:    String,
    pub subject:          String,
    pub html_body:        String,
    pub text_body:        String,
}

impl OutboundEmail {
    pub fn into_message(self) -> Result<Message, MailError> {
        let from     = Mailbox::new(Some(self.from_name), self.from_address.parse::<Address>()?);
        let to       = Mailbox::new(None, self.recipient.parse::<Address>()?);
        let reply_to = Mailbox::new(Some(self.reply_to_name), self.reply_to_address.parse::<Address>()?);

        let message = Message::builder()
            .from(from)
            .to(to)
            .reply_to(reply_to)
            .subject(self.subject)
            .multipart(MultiPart::alternative_plain_html(self.text_body, self.html_body))?;

        Ok(message)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Mailer: Send + Sync + 'static {
    /// Deliver one email through the relay described by `smtp`.
    fn send(
        &self,
        smtp: SmtpSettings,
        email: OutboundEmail,
    ) -> impl Future<Output = Result<(), MailError>> + Send;
}

/// Delivers through an authenticated STARTTLS SMTP relay, opening a new
/// connection for every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpMailer;

impl Mailer for SmtpMailer {
    async fn send(&self, smtp: SmtpSettings, email: OutboundEmail) -> Result<(), MailError> {
        let message = email.into_message()?;

        let creds = Credentials::new(smtp.username, smtp.password);

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)?
            .port(smtp.port)
            .credentials(creds)
            .build();

        let response = transport.send(message).await?;
        tracing::debug!(code = %response.code(), "SMTP relay accepted message");

        Ok(())
    }
}

#[cfg(test)]
impl MockMailer {
    pub fn with_send(mut self, email: OutboundEmail, result: Result<(), MailError>) -> Self {
        self.expect_send()
            .once()
            .withf(move |_, sent| *sent == email)
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutboundEmail {
        OutboundEmail {
            from_address:     "forms@example.com".into(),
            from_name:        "Vertex Experience Contact Form".into(),
            recipient:        "team@example.com".into(),
            reply_to_address: "ada@example.com".into(),
            reply_to_name:    "Ada Lovelace".into(),
            subject:          "New Free Audit Request from Ada Lovelace".into(),
            html_body:        "<p>Hello</p>".into(),
            text_body:        "Hello".into(),
        }
    }

    #[test]
    fn builds_alternative_message() {
        let message = email().into_message().unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("Vertex Experience Contact Form"));
        assert!(formatted.contains("<forms@example.com>"));
        assert!(formatted.contains("team@example.com"));
        assert!(formatted.contains("Reply-To: "));
        assert!(formatted.contains("<ada@example.com>"));
        assert!(formatted.contains("multipart/alternative"));
        assert!(formatted.contains("text/plain"));
        assert!(formatted.contains("text/html"));
    }

    #[test]
    fn rejects_unparsable_reply_to() {
        let email = OutboundEmail { reply_to_address: "not an address".into(), ..email() };
        assert!(matches!(email.into_message(), Err(MailError::Address(_))));
    }
}
