use std::path::PathBuf;

/// Admin configuration
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATA_DIR | ./data | Directory holding the persisted catalog |
/// | OTP_API_URL | http://localhost:5000 | Base URL of the OTP endpoint |
/// | REQUEST_TIMEOUT_MS | 30000 | OTP request timeout (milliseconds) |
/// | SHOW_DEBUG_OTP | true outside production | Surface the debug OTP passthrough |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Log level for the tracing subscriber |
///
/// # Example
///
/// ```ignore
/// DATA_DIR=/var/lib/productr OTP_API_URL=https://otp.example.com cargo test
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted catalog snapshot
    pub data_dir: String,
    /// Base URL of the external OTP endpoint
    pub otp_api_url: String,
    /// OTP request timeout (milliseconds)
    pub request_timeout_ms: u64,
    /// Surface the `otp` field of the send response to the user.
    /// The endpoint returns the code itself when email delivery cannot be
    /// confirmed; this flag makes that an explicit debug surface.
    pub show_debug_otp: bool,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level for the tracing subscriber
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            otp_api_url: std::env::var("OTP_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            show_debug_otp: std::env::var("SHOW_DEBUG_OTP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(environment != "production"),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment,
        }
    }

    /// Override the data directory, keeping everything else from the
    /// environment. Used in tests.
    pub fn with_data_dir(data_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }

    /// Path of the persisted catalog snapshot
    pub fn catalog_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("products.json")
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_path_under_data_dir() {
        let config = Config::with_data_dir("/tmp/productr");
        assert_eq!(
            config.catalog_path(),
            PathBuf::from("/tmp/productr/products.json")
        );
    }
}
