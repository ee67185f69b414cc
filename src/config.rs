//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing env var {var}")]
    Missing { var: &'static str },
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Where the server listens and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub site_dir: PathBuf,
}

impl SiteConfig {
    /// Build from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `site/` next to the crate manifest
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        let site_dir = std::env::var("SITE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site"));

        Ok(Self { port, site_dir })
    }
}

/// Sender/recipient addresses for forwarded contact submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAddresses {
    pub from: String,
    pub to: String,
}

/// Everything the contact mailer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: String,
    pub addresses: MailAddresses,
}

impl MailConfig {
    /// Build from environment variables.
    ///
    /// Required:
    /// - `RESEND_API_KEY`
    /// - `CONTACT_FROM_EMAIL`
    /// - `CONTACT_TO_EMAIL`
    ///
    /// # Errors
    ///
    /// Returns the first variable that is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = required("RESEND_API_KEY")?;
        let from = required("CONTACT_FROM_EMAIL")?;
        let to = required("CONTACT_TO_EMAIL")?;
        Ok(Self { api_key, addresses: MailAddresses { from, to } })
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(ConfigError::Missing { var }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
