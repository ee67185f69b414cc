//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional contact mailer and the addresses it sends between.
//! Nothing in it is mutated after startup.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::MailAddresses;
use crate::mail::ContactMailer;

// =============================================================================
// CONTACT DESK
// =============================================================================

/// Configured mailer plus its from/to addresses.
#[derive(Clone)]
pub struct ContactDesk {
    pub mailer: Arc<dyn ContactMailer>,
    pub addresses: MailAddresses,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// `None` if mail env vars are not configured.
    pub contact: Option<ContactDesk>,
    /// Root directory for the static brochure pages.
    pub site_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(contact: Option<ContactDesk>, site_dir: PathBuf) -> Self {
        Self { contact, site_dir }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
