//! Unified error module
//!
//! Error codes, categories, and the application error type shared by the
//! admin core and the OTP client.

pub mod category;
pub mod codes;
pub mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
