//! Unified error codes for the Productr admin
//!
//! Error codes are shared between the admin core and the frontend shell.
//! They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Product errors
//! - 3xxx: Storage errors
//! - 4xxx: Remote (OTP endpoint) errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Login identifier is empty or whitespace-only
    EmptyIdentifier = 1002,
    /// Verification code was rejected
    VerificationCodeInvalid = 1003,
    /// Verification code entry is incomplete (fewer than 6 digits)
    VerificationCodeIncomplete = 1004,

    // ==================== 2xxx: Product ====================
    /// Product not found
    ProductNotFound = 2001,

    // ==================== 3xxx: Storage ====================
    /// Reading the persisted catalog failed
    StorageReadFailed = 3001,
    /// Writing the persisted catalog failed
    StorageWriteFailed = 3002,

    // ==================== 4xxx: Remote ====================
    /// OTP endpoint unreachable
    NetworkUnreachable = 4001,
    /// OTP endpoint reachable but returned success=false
    RemoteRejected = 4002,
    /// OTP endpoint returned an unparseable response
    InvalidResponse = 4003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::EmptyIdentifier => "Please enter your email or phone number",
            ErrorCode::VerificationCodeInvalid => "Invalid OTP. Please try again.",
            ErrorCode::VerificationCodeIncomplete => "Please enter complete 6-digit OTP",

            // Product
            ErrorCode::ProductNotFound => "Product not found",

            // Storage
            ErrorCode::StorageReadFailed => "Failed to read the product catalog",
            ErrorCode::StorageWriteFailed => "Failed to save the product catalog",

            // Remote
            ErrorCode::NetworkUnreachable => "Failed to connect to server. Please try again.",
            ErrorCode::RemoteRejected => "The server rejected the request",
            ErrorCode::InvalidResponse => "The server returned an invalid response",

            // System
            ErrorCode::InternalError => "Internal error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::EmptyIdentifier),
            1003 => Ok(ErrorCode::VerificationCodeInvalid),
            1004 => Ok(ErrorCode::VerificationCodeIncomplete),

            // Product
            2001 => Ok(ErrorCode::ProductNotFound),

            // Storage
            3001 => Ok(ErrorCode::StorageReadFailed),
            3002 => Ok(ErrorCode::StorageWriteFailed),

            // Remote
            4001 => Ok(ErrorCode::NetworkUnreachable),
            4002 => Ok(ErrorCode::RemoteRejected),
            4003 => Ok(ErrorCode::InvalidResponse),

            // System
            9001 => Ok(ErrorCode::InternalError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::ProductNotFound.code(), 2001);
        assert_eq!(ErrorCode::StorageWriteFailed.code(), 3002);
        assert_eq!(ErrorCode::NetworkUnreachable.code(), 4001);
    }

    #[test]
    fn test_try_from_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::ProductNotFound,
            ErrorCode::RemoteRejected,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(12345), Err(InvalidErrorCode(12345)));
    }

    #[test]
    fn test_serialize_as_u16() {
        let json = serde_json::to_string(&ErrorCode::ProductNotFound).unwrap();
        assert_eq!(json, "2001");

        let code: ErrorCode = serde_json::from_str("1001").unwrap();
        assert_eq!(code, ErrorCode::NotAuthenticated);
    }
}
