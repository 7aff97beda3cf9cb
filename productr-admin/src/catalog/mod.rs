//! Catalog Store - the canonical product collection
//!
//! Sole mediator between UI mutation intents and the persisted product
//! collection. Persistence sits behind the narrow [`CatalogBackend`]
//! trait; every mutation reads the full collection, applies the change,
//! and writes the full collection back.

pub mod backend;
pub mod image;
pub mod store;
pub mod validation;

pub use backend::{CatalogBackend, JsonFileBackend, MemoryBackend};
pub use image::{encode_image, encode_image_file};
pub use store::{CatalogStore, Tab, filter};
