//! View-models
//!
//! Pure state controllers behind the admin screens. The presentation layer
//! renders their snapshots and calls their action methods; no view here
//! touches pixels or navigation directly.

pub mod dashboard;
pub mod login;
pub mod manager;
pub mod otp_entry;
pub mod otp_verify;

pub use dashboard::{DashboardTab, DashboardView};
pub use login::LoginView;
pub use manager::{ManagerView, Notification};
pub use otp_entry::OtpEntry;
pub use otp_verify::OtpVerifyView;

/// Copy for an empty product list, distinguishing why it is empty
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EmptyState {
    pub headline: String,
    pub body: String,
    pub hint: String,
}
