//! Mail types — provider-neutral message, receipt and error.

use serde::Serialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by mailer operations.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The email provider rejected the request or could not be reached.
    #[error("email provider error: {0}")]
    Provider(String),
}

// =============================================================================
// MESSAGE
// =============================================================================

/// A fully composed email ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
    pub reply_to: Option<String>,
}

/// Provider acknowledgement for an accepted email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendReceipt {
    pub id: String,
}

// =============================================================================
// TRAIT
// =============================================================================

/// Anything that can deliver an [`OutboundEmail`].
#[async_trait::async_trait]
pub trait ContactMailer: Send + Sync {
    /// Send one email. Called at most once per submission.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Provider`] when the provider does not accept it.
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, MailError>;
}
