//! Mail — outbound transactional email for contact submissions.
//!
//! DESIGN
//! ======
//! Handlers depend on the `ContactMailer` trait, never on a provider client,
//! so tests can swap in a capturing mock. `ResendMailer` is the production
//! implementation.

pub mod resend;
pub mod types;

pub use resend::ResendMailer;
pub use types::{ContactMailer, MailError, OutboundEmail, SendReceipt};
