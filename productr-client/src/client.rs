//! OTP client implementations

use crate::{
    ClientError, ClientResult, SendOtpRequest, SendOtpResponse, VerifyOtpRequest,
    VerifyOtpResponse,
};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

// ============================================================================
// OtpApi Trait
// ============================================================================

/// The consumed OTP endpoint contract
///
/// One implementation talks HTTP ([`NetworkClient`]); tests script a
/// [`MockOtpApi`] instead.
#[async_trait]
pub trait OtpApi: Send + Sync {
    /// Request a one-time code for the given principal identifier
    async fn send_otp(&self, email: &str) -> ClientResult<SendOtpResponse>;

    /// Verify a previously issued code
    async fn verify_otp(&self, email: &str, code: &str) -> ClientResult<VerifyOtpResponse>;
}

// ============================================================================
// NetworkClient - HTTP client
// ============================================================================

/// Network client (HTTP)
#[derive(Debug, Clone)]
pub struct NetworkClient {
    client: reqwest::Client,
    base_url: String,
}

impl NetworkClient {
    /// Create a new network client
    pub fn new(base_url: &str, timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(%url, %status, "OTP endpoint responded");

        // The endpoint reports failures through the `success` flag in the
        // body, also on non-2xx statuses; an unparseable body is the only
        // hard invalid-response case.
        serde_json::from_str(&text).map_err(|e| {
            ClientError::InvalidResponse(format!("status {status}: {e}"))
        })
    }
}

#[async_trait]
impl OtpApi for NetworkClient {
    async fn send_otp(&self, email: &str) -> ClientResult<SendOtpResponse> {
        let request = SendOtpRequest {
            email: email.to_string(),
        };
        self.post("/api/send-otp", &request).await
    }

    async fn verify_otp(&self, email: &str, code: &str) -> ClientResult<VerifyOtpResponse> {
        let request = VerifyOtpRequest {
            email: email.to_string(),
            otp: code.to_string(),
        };
        self.post("/api/verify-otp", &request).await
    }
}

// ============================================================================
// MockOtpApi - scripted endpoint for tests
// ============================================================================

/// Scripted OTP endpoint for tests
///
/// Responses are consumed in FIFO order; with nothing scripted, both calls
/// succeed. Every call is recorded for assertions.
#[cfg(feature = "mock")]
#[derive(Debug, Default)]
pub struct MockOtpApi {
    send_script: parking_lot::Mutex<std::collections::VecDeque<ClientResult<SendOtpResponse>>>,
    verify_script:
        parking_lot::Mutex<std::collections::VecDeque<ClientResult<VerifyOtpResponse>>>,
    sent_emails: parking_lot::Mutex<Vec<String>>,
    verify_calls: parking_lot::Mutex<Vec<(String, String)>>,
}

#[cfg(feature = "mock")]
impl MockOtpApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an arbitrary send result
    pub fn script_send(&self, result: ClientResult<SendOtpResponse>) {
        self.send_script.lock().push_back(result);
    }

    /// Queue an arbitrary verify result
    pub fn script_verify(&self, result: ClientResult<VerifyOtpResponse>) {
        self.verify_script.lock().push_back(result);
    }

    /// Queue a successful send, optionally carrying the debug passthrough code
    pub fn send_ok(&self, otp: Option<&str>) {
        self.script_send(Ok(SendOtpResponse {
            success: true,
            message: None,
            otp: otp.map(str::to_string),
        }));
    }

    /// Queue a send rejection with the given message
    pub fn send_rejected(&self, message: &str) {
        self.script_send(Ok(SendOtpResponse {
            success: false,
            message: Some(message.to_string()),
            otp: None,
        }));
    }

    /// Queue a send transport failure
    pub fn send_unreachable(&self) {
        self.script_send(Err(ClientError::Unreachable("connection refused".into())));
    }

    /// Queue a successful verification
    pub fn verify_ok(&self) {
        self.script_verify(Ok(VerifyOtpResponse {
            success: true,
            message: None,
        }));
    }

    /// Queue a verify rejection with the given message
    pub fn verify_rejected(&self, message: &str) {
        self.script_verify(Ok(VerifyOtpResponse {
            success: false,
            message: Some(message.to_string()),
        }));
    }

    /// Queue a verify transport failure
    pub fn verify_unreachable(&self) {
        self.script_verify(Err(ClientError::Unreachable("connection refused".into())));
    }

    /// Emails passed to `send_otp` so far
    pub fn sent_emails(&self) -> Vec<String> {
        self.sent_emails.lock().clone()
    }

    /// `(email, code)` pairs passed to `verify_otp` so far
    pub fn verify_calls(&self) -> Vec<(String, String)> {
        self.verify_calls.lock().clone()
    }
}

#[cfg(feature = "mock")]
#[async_trait]
impl OtpApi for MockOtpApi {
    async fn send_otp(&self, email: &str) -> ClientResult<SendOtpResponse> {
        self.sent_emails.lock().push(email.to_string());
        self.send_script.lock().pop_front().unwrap_or(Ok(SendOtpResponse {
            success: true,
            message: None,
            otp: None,
        }))
    }

    async fn verify_otp(&self, email: &str, code: &str) -> ClientResult<VerifyOtpResponse> {
        self.verify_calls
            .lock()
            .push((email.to_string(), code.to_string()));
        self.verify_script
            .lock()
            .pop_front()
            .unwrap_or(Ok(VerifyOtpResponse {
                success: true,
                message: None,
            }))
    }
}
