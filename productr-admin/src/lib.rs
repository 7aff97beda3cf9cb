//! Productr Admin - storefront catalog admin core
//!
//! # Architecture overview
//!
//! State-management core behind the storefront admin UI. The presentation
//! toolkit renders snapshots of the view-models here and feeds user intents
//! back in; nothing in this crate draws pixels or owns navigation.
//!
//! - **Catalog store** (`catalog`): the canonical product collection and
//!   its read/write contract to persistent storage
//! - **Auth gate** (`core/session`): session principal establishment and
//!   the precondition check every protected view runs on activation
//! - **View-models** (`views`): login, OTP entry/verification, the
//!   read-only dashboard, and the full CRUD manager
//!
//! # Module structure
//!
//! ```text
//! productr-admin/src/
//! ├── core/          # Config, logger, routes, session
//! ├── catalog/       # Store, storage backends, image encoding
//! ├── views/         # Login, OTP, dashboard, manager view-models
//! └── app.rs         # Composition root
//! ```

pub mod app;
pub mod catalog;
pub mod core;
pub mod views;

// Re-export public types
pub use app::AdminApp;
pub use catalog::{CatalogBackend, CatalogStore, JsonFileBackend, MemoryBackend, Tab};
pub use crate::core::{Config, Route, SessionStore};

// Re-export unified error types from shared
pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use crate::core::logger::{init_logger, init_logger_with_file};
