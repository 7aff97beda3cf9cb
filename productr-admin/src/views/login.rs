//! Login view-model
//!
//! One field: the email or phone identifier. A successful submit
//! establishes the session principal and hands navigation the OTP route.

use crate::core::{Route, SessionStore};

#[derive(Debug, Default)]
pub struct LoginView {
    identifier: String,
    error: Option<String>,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Visible error message, if the last submit was rejected
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form
    ///
    /// Establishes the session and returns the OTP route on success; on a
    /// rejected identifier the message becomes visible and navigation
    /// stays put.
    pub fn submit(&mut self, session: &SessionStore) -> Option<Route> {
        match session.establish(&self.identifier) {
            Ok(()) => {
                self.error = None;
                Some(Route::OtpVerify)
            }
            Err(e) => {
                self.error = Some(e.message);
                None
            }
        }
    }
}
