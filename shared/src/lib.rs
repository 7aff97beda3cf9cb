//! Shared types for the Productr admin
//!
//! Common types used across multiple crates: the product model, draft
//! payloads, and the unified error module.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{ExchangeEligibility, Product, ProductDraft, ProductType};
