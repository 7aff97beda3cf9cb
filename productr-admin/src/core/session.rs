//! Session principal store
//!
//! The presence of a principal is the sole authorization signal; there is
//! no token, role, or expiry. Lifetime is one process session, matching the
//! browser-session scope of the original storefront.

use parking_lot::RwLock;
use shared::{AppError, AppResult};

/// Session-scoped principal store
#[derive(Debug, Default)]
pub struct SessionStore {
    principal: RwLock<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the identifier as the active session's principal
    ///
    /// Rejects empty or whitespace-only identifiers without touching the
    /// current session state.
    pub fn establish(&self, identifier: &str) -> AppResult<()> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return Err(AppError::empty_identifier());
        }

        *self.principal.write() = Some(trimmed.to_string());
        tracing::debug!(principal = %trimmed, "Session established");
        Ok(())
    }

    /// Read back the active principal, if any
    pub fn current(&self) -> Option<String> {
        self.principal.read().clone()
    }

    /// Remove the active principal
    pub fn clear(&self) {
        *self.principal.write() = None;
        tracing::debug!("Session cleared");
    }

    /// The precondition check every protected view runs on activation:
    /// the principal, or a not-authenticated error telling the caller to
    /// redirect to the login entry point.
    pub fn require_principal(&self) -> AppResult<String> {
        self.current().ok_or_else(AppError::not_authenticated)
    }
}
