//! Navigable entry points
//!
//! The navigation shell owns actual history/URL handling; this module only
//! defines the route table and the fallback rule.

/// Navigable entry points of the admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Login form (default entry point)
    Login,
    /// OTP verification screen
    OtpVerify,
    /// Read-only dashboard
    Dashboard,
    /// Full CRUD product manager
    Manager,
}

impl Route {
    /// Resolve a path to a route; unmatched paths fall back to login
    pub fn parse(path: &str) -> Self {
        match path {
            "/" => Self::Login,
            "/otp" => Self::OtpVerify,
            "/home" => Self::Dashboard,
            "/products" => Self::Manager,
            _ => Self::Login,
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::OtpVerify => "/otp",
            Self::Dashboard => "/home",
            Self::Manager => "/products",
        }
    }

    /// Whether the route requires an established session principal
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse("/otp"), Route::OtpVerify);
        assert_eq!(Route::parse("/home"), Route::Dashboard);
        assert_eq!(Route::parse("/products"), Route::Manager);
    }

    #[test]
    fn test_unmatched_path_falls_back_to_login() {
        assert_eq!(Route::parse("/signup"), Route::Login);
        assert_eq!(Route::parse(""), Route::Login);
        assert_eq!(Route::parse("/products/42"), Route::Login);
    }

    #[test]
    fn test_path_roundtrip() {
        for route in [Route::Login, Route::OtpVerify, Route::Dashboard, Route::Manager] {
            assert_eq!(Route::parse(route.path()), route);
        }
    }

    #[test]
    fn test_protection() {
        assert!(!Route::Login.is_protected());
        assert!(Route::OtpVerify.is_protected());
        assert!(Route::Dashboard.is_protected());
        assert!(Route::Manager.is_protected());
    }
}
