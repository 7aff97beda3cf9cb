//! Composition root
//!
//! Owns the long-lived state the screens share: configuration, the session
//! store, the catalog store, and the OTP client. The presentation shell
//! constructs one [`AdminApp`] at startup and activates view-models
//! through it.

use crate::catalog::{CatalogBackend, CatalogStore, JsonFileBackend};
use crate::core::{Config, Route, SessionStore};
use anyhow::Context;
use productr_client::{NetworkClient, OtpApi};
use std::sync::Arc;

/// Prepare the process environment: .env, logging, data directory
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    crate::core::logger::init_logger_with_file(Some(&config.log_level), None);

    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("failed to create data dir {}", config.data_dir))?;

    tracing::info!(
        environment = %config.environment,
        data_dir = %config.data_dir,
        "Productr admin starting"
    );
    Ok(config)
}

/// Long-lived application state shared by all screens
pub struct AdminApp {
    config: Config,
    session: Arc<SessionStore>,
    store: Arc<CatalogStore>,
    client: Arc<dyn OtpApi>,
}

impl std::fmt::Debug for AdminApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminApp")
            .field("config", &self.config)
            .finish()
    }
}

impl AdminApp {
    /// Wire the production parts: JSON file persistence under the data
    /// directory and the HTTP OTP client.
    pub fn new(config: Config) -> Self {
        let backend = Arc::new(JsonFileBackend::new(config.catalog_path()));
        let client = Arc::new(NetworkClient::new(
            &config.otp_api_url,
            config.request_timeout_ms,
        ));
        Self::with_parts(config, backend, client)
    }

    /// Wire explicit parts; tests inject memory backends and mock clients
    pub fn with_parts(
        config: Config,
        backend: Arc<dyn CatalogBackend>,
        client: Arc<dyn OtpApi>,
    ) -> Self {
        Self {
            config,
            session: Arc::new(SessionStore::new()),
            store: Arc::new(CatalogStore::new(backend)),
            client,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn client(&self) -> Arc<dyn OtpApi> {
        self.client.clone()
    }

    /// Resolve a path, applying the auth gate: protected routes without an
    /// established principal land back on login.
    pub fn resolve(&self, path: &str) -> Route {
        let route = Route::parse(path);
        if route.is_protected() && self.session.current().is_none() {
            tracing::debug!(%path, "No session principal, redirecting to login");
            return Route::Login;
        }
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryBackend;
    use productr_client::MockOtpApi;

    fn app() -> AdminApp {
        AdminApp::with_parts(
            Config::with_data_dir("/tmp/unused"),
            Arc::new(MemoryBackend::new()),
            Arc::new(MockOtpApi::new()),
        )
    }

    #[test]
    fn test_protected_routes_gate_on_session() {
        let app = app();

        assert_eq!(app.resolve("/home"), Route::Login);
        assert_eq!(app.resolve("/products"), Route::Login);
        assert_eq!(app.resolve("/otp"), Route::Login);

        app.session().establish("user@example.com").unwrap();
        assert_eq!(app.resolve("/home"), Route::Dashboard);
        assert_eq!(app.resolve("/products"), Route::Manager);
        assert_eq!(app.resolve("/otp"), Route::OtpVerify);
    }

    #[test]
    fn test_unmatched_path_redirects_to_login() {
        let app = app();
        app.session().establish("user@example.com").unwrap();
        assert_eq!(app.resolve("/nope"), Route::Login);
    }
}
