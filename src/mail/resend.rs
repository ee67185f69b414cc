//! Resend-backed mailer.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use super::types::{ContactMailer, MailError, OutboundEmail, SendReceipt};

pub struct ResendMailer {
    client: Resend,
}

impl ResendMailer {
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self { client: Resend::new(api_key) }
    }
}

#[async_trait::async_trait]
impl ContactMailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, MailError> {
        let mut options = CreateEmailBaseOptions::new(&email.from, email.to.iter(), &email.subject)
            .with_html(&email.html)
            .with_text(&email.text);
        if let Some(reply_to) = &email.reply_to {
            options = options.with_reply(reply_to);
        }

        let response = self
            .client
            .emails
            .send(options)
            .await
            .map_err(|e| MailError::Provider(e.to_string()))?;

        Ok(SendReceipt { id: response.id.to_string() })
    }
}
