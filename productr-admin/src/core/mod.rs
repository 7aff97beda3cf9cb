//! Config, logging, routes, and session state

pub mod config;
pub mod logger;
pub mod routes;
pub mod session;

pub use config::Config;
pub use routes::Route;
pub use session::SessionStore;
