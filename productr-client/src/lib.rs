//! OTP endpoint client for the Productr admin
//!
//! Wraps the external OTP HTTP API behind the [`OtpApi`] trait: a
//! [`NetworkClient`] for production and, behind the `mock` feature, a
//! scripted [`MockOtpApi`] for tests.

mod client;
mod error;
mod types;

pub use client::{NetworkClient, OtpApi};
pub use error::{ClientError, ClientResult};
pub use types::{SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse};

#[cfg(feature = "mock")]
pub use client::MockOtpApi;
