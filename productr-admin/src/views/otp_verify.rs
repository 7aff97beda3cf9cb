//! OTP verification view-model
//!
//! Entering the screen sends the initial code to the session principal;
//! the user then fills the six slots and verifies. Send and verify are the
//! only suspending operations in the admin, one in-flight request per
//! trigger, with the trigger re-enabled through a drop guard on every exit
//! path.

use crate::core::{Config, Route, SessionStore};
use crate::views::otp_entry::OtpEntry;
use productr_client::OtpApi;
use shared::{AppResult, ErrorCode};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Re-enables a trigger when the request finishes, success or failure
struct InFlightGuard(Arc<AtomicBool>);

impl InFlightGuard {
    /// Take the flag; `None` while a request is already in flight
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        if flag.swap(true, Ordering::SeqCst) {
            None
        } else {
            Some(Self(flag.clone()))
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct OtpVerifyView {
    email: String,
    entry: OtpEntry,
    client: Arc<dyn OtpApi>,
    sending: Arc<AtomicBool>,
    verifying: Arc<AtomicBool>,
    otp_sent: bool,
    debug_code: Option<String>,
    error: Option<String>,
    show_debug_otp: bool,
}

impl std::fmt::Debug for OtpVerifyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtpVerifyView")
            .field("email", &self.email)
            .field("otp_sent", &self.otp_sent)
            .field("error", &self.error)
            .finish()
    }
}

impl OtpVerifyView {
    /// Activate the screen for the current session principal
    ///
    /// Fails with a not-authenticated error (caller redirects to login)
    /// when no principal is established; otherwise the initial code is
    /// sent before the view is handed back.
    pub async fn activate(
        session: &SessionStore,
        client: Arc<dyn OtpApi>,
        config: &Config,
    ) -> AppResult<Self> {
        let email = session.require_principal()?;

        let mut view = Self {
            email,
            entry: OtpEntry::new(),
            client,
            sending: Arc::new(AtomicBool::new(false)),
            verifying: Arc::new(AtomicBool::new(false)),
            otp_sent: false,
            debug_code: None,
            error: None,
            show_debug_otp: config.show_debug_otp,
        };
        view.send_code().await;
        Ok(view)
    }

    // =========================================================================
    // Send / resend
    // =========================================================================

    /// Request a code for the principal
    ///
    /// Ignored while a send is already in flight.
    pub async fn send_code(&mut self) {
        let Some(_guard) = InFlightGuard::acquire(&self.sending) else {
            return;
        };

        self.error = None;
        self.debug_code = None;

        let result = self.client.send_otp(&self.email).await;
        match result {
            Ok(response) if response.success => {
                self.otp_sent = true;
                if self.show_debug_otp {
                    self.debug_code = response.otp;
                } else if response.otp.is_some() {
                    tracing::debug!("OTP passthrough withheld, debug surface disabled");
                }
            }
            Ok(response) => {
                self.error = Some(response.message.unwrap_or_else(|| {
                    "Failed to send OTP. Please try again.".to_string()
                }));
            }
            Err(e) if e.is_transport() => {
                tracing::warn!(error = %e, "OTP send failed to reach the endpoint");
                self.error = Some(ErrorCode::NetworkUnreachable.message().to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, "OTP send returned an invalid response");
                self.error = Some(ErrorCode::InvalidResponse.message().to_string());
            }
        }
    }

    /// Resend: clear the entered digits and any error, then send again
    pub async fn resend(&mut self) {
        self.entry.clear();
        self.error = None;
        self.send_code().await;
    }

    // =========================================================================
    // Verify
    // =========================================================================

    /// Verify the entered code
    ///
    /// Returns the dashboard route on success. An incomplete entry is
    /// rejected locally without issuing a request; a rejected or failed
    /// verification surfaces its message and clears the slots for
    /// re-entry.
    pub async fn verify(&mut self) -> Option<Route> {
        let Some(code) = self.entry.code() else {
            self.error = Some(ErrorCode::VerificationCodeIncomplete.message().to_string());
            return None;
        };

        let Some(_guard) = InFlightGuard::acquire(&self.verifying) else {
            return None;
        };

        self.error = None;

        let result = self.client.verify_otp(&self.email, &code).await;
        match result {
            Ok(response) if response.success => Some(Route::Dashboard),
            Ok(response) => {
                self.error = Some(
                    response
                        .message
                        .unwrap_or_else(|| ErrorCode::VerificationCodeInvalid.message().to_string()),
                );
                self.entry.clear();
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "OTP verify failed");
                let kind = if e.is_transport() {
                    ErrorCode::NetworkUnreachable
                } else {
                    ErrorCode::InvalidResponse
                };
                self.error = Some(kind.message().to_string());
                self.entry.clear();
                None
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn entry(&self) -> &OtpEntry {
        &self.entry
    }

    pub fn entry_mut(&mut self) -> &mut OtpEntry {
        &mut self.entry
    }

    /// Whether the code was sent successfully at least once
    pub fn otp_sent(&self) -> bool {
        self.otp_sent
    }

    /// Debug passthrough code, present only when the debug surface is on
    pub fn debug_code(&self) -> Option<&str> {
        self.debug_code.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Send trigger disabled while true
    pub fn is_sending(&self) -> bool {
        self.sending.load(Ordering::SeqCst)
    }

    /// Verify trigger disabled while true
    pub fn is_verifying(&self) -> bool {
        self.verifying.load(Ordering::SeqCst)
    }
}
