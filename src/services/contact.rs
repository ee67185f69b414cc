//! Contact submission service.
//!
//! Validates a submission from the site's contact form, strips angle brackets
//! from every field, and forwards it once through a [`ContactMailer`]. Angle
//! bracket stripping keeps raw markup out of the forwarded HTML; it is not a
//! security boundary.

use serde::Deserialize;

use crate::config::MailAddresses;
use crate::mail::{ContactMailer, MailError, OutboundEmail, SendReceipt};

const CONTACT_EMAIL_TEMPLATE: &str = include_str!("../../templates/contact_email.html");
const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("missing required fields")]
    MissingRequiredFields,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("email delivery failed: {0}")]
    Delivery(#[from] MailError),
}

// =============================================================================
// TYPES
// =============================================================================

/// Raw contact form body as posted by the site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

/// A validated, sanitized submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Basic `local@domain.tld` shape check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Remove every `<` and `>`.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

fn required(field: Option<&String>) -> Option<String> {
    field.map(|v| sanitize(v)).filter(|v| !v.is_empty())
}

/// Sanitize every field, then check required fields and the email shape.
///
/// Checks run on sanitized values, so a field made only of angle brackets
/// counts as missing and the forwarded email is always well formed.
///
/// # Errors
///
/// [`ContactError::MissingRequiredFields`] when name, email or message is
/// absent or empty; [`ContactError::InvalidEmail`] when the email is malformed.
pub fn validate(request: &ContactRequest) -> Result<ContactSubmission, ContactError> {
    let (Some(name), Some(email), Some(message)) = (
        required(request.name.as_ref()),
        required(request.email.as_ref()),
        required(request.message.as_ref()),
    ) else {
        return Err(ContactError::MissingRequiredFields);
    };

    if !is_valid_email(&email) {
        return Err(ContactError::InvalidEmail);
    }

    Ok(ContactSubmission {
        name,
        email,
        company: request.company.as_deref().map(sanitize),
        phone: request.phone.as_deref().map(sanitize),
        service: request.service.as_deref().map(sanitize),
        message,
    })
}

// =============================================================================
// COMPOSITION
// =============================================================================

fn or_not_provided(field: Option<&String>) -> &str {
    field.map(String::as_str).filter(|v| !v.is_empty()).unwrap_or(NOT_PROVIDED)
}

/// Fill `{{KEY}}` placeholders in one pass. Substituted values are never
/// rescanned; unknown keys are left as written.
fn fill_template(template: &str, value_for: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        match value_for(&after[..end]) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

#[must_use]
pub fn render_contact_template(submission: &ContactSubmission) -> String {
    fill_template(CONTACT_EMAIL_TEMPLATE, |key| match key {
        "NAME" => Some(submission.name.clone()),
        "EMAIL" => Some(submission.email.clone()),
        "COMPANY" => Some(or_not_provided(submission.company.as_ref()).to_owned()),
        "PHONE" => Some(or_not_provided(submission.phone.as_ref()).to_owned()),
        "SERVICE" => Some(or_not_provided(submission.service.as_ref()).to_owned()),
        "MESSAGE" => Some(submission.message.replace('\n', "<br>")),
        _ => None,
    })
}

#[must_use]
pub fn render_plain_text(submission: &ContactSubmission) -> String {
    format!(
        "New contact form submission\n\n\
         Name: {}\n\
         Email: {}\n\
         Company: {}\n\
         Phone: {}\n\
         Service: {}\n\n\
         Message:\n{}\n",
        submission.name,
        submission.email,
        or_not_provided(submission.company.as_ref()),
        or_not_provided(submission.phone.as_ref()),
        or_not_provided(submission.service.as_ref()),
        submission.message,
    )
}

/// Build the email forwarded to the brokerage inbox.
#[must_use]
pub fn compose(submission: &ContactSubmission, addresses: &MailAddresses) -> OutboundEmail {
    OutboundEmail {
        from: addresses.from.clone(),
        to: vec![addresses.to.clone()],
        subject: format!("New Contact Form Submission from {}", submission.name),
        html: render_contact_template(submission),
        text: render_plain_text(submission),
        reply_to: Some(submission.email.clone()),
    }
}

// =============================================================================
// SUBMIT
// =============================================================================

/// Validate, sanitize and forward one submission. No retry on failure.
///
/// # Errors
///
/// Validation errors as in [`validate`], or [`ContactError::Delivery`] when
/// the mailer fails.
pub async fn submit(
    mailer: &dyn ContactMailer,
    addresses: &MailAddresses,
    request: &ContactRequest,
) -> Result<SendReceipt, ContactError> {
    let submission = validate(request)?;
    let email = compose(&submission, addresses);
    let receipt = mailer.send(&email).await?;
    Ok(receipt)
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
