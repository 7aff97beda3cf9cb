//! OTP endpoint request/response types
//!
//! The wire contract is consumed only; field names follow the endpoint's
//! JSON shape exactly.

use serde::{Deserialize, Serialize};

/// Body for `POST /api/send-otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

/// Response from `POST /api/send-otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub success: bool,
    /// Human-readable failure reason when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Debug passthrough of the issued code, present when the endpoint
    /// cannot confirm email delivery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

/// Body for `POST /api/verify-otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Response from `POST /api/verify-otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
