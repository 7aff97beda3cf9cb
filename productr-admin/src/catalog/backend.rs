//! Catalog persistence backends
//!
//! The store sees one narrow interface: load the serialized collection,
//! save the serialized collection. The durable backend writes a JSON file;
//! the in-memory backend backs tests.

use parking_lot::RwLock;
use shared::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Narrow persistence interface for the catalog snapshot
pub trait CatalogBackend: Send + Sync {
    /// Read the persisted snapshot; `None` when nothing has been persisted yet
    fn load(&self) -> AppResult<Option<String>>;

    /// Replace the persisted snapshot
    fn save(&self, snapshot: &str) -> AppResult<()>;
}

/// Durable backend: one JSON file under the configured data directory
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    file_path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl CatalogBackend for JsonFileBackend {
    fn load(&self) -> AppResult<Option<String>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        std::fs::read_to_string(&self.file_path)
            .map(Some)
            .map_err(|e| {
                AppError::storage_read(format!(
                    "failed to read {}: {e}",
                    self.file_path.display()
                ))
            })
    }

    fn save(&self, snapshot: &str) -> AppResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::storage_write(format!(
                    "failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }

        std::fs::write(&self.file_path, snapshot).map_err(|e| {
            AppError::storage_write(format!(
                "failed to write {}: {e}",
                self.file_path.display()
            ))
        })
    }
}

/// In-memory backend for tests
#[derive(Debug, Default)]
pub struct MemoryBackend {
    snapshot: RwLock<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with a raw snapshot (also used to plant malformed
    /// data in tests)
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot.into())),
        }
    }
}

impl CatalogBackend for MemoryBackend {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(self.snapshot.read().clone())
    }

    fn save(&self, snapshot: &str) -> AppResult<()> {
        *self.snapshot.write() = Some(snapshot.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.load().unwrap(), None);

        backend.save("[]").unwrap();
        assert_eq!(backend.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_backend_absent_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("products.json"));
        assert_eq!(backend.load().unwrap(), None);
    }

    #[test]
    fn test_file_backend_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("nested/products.json"));

        backend.save(r#"[{"id":1}]"#).unwrap();
        assert_eq!(backend.load().unwrap().as_deref(), Some(r#"[{"id":1}]"#));
    }

    #[test]
    fn test_file_backend_write_failure_is_storage_error() {
        // A directory where the file should be makes the write fail
        let dir = tempfile::tempdir().unwrap();
        let clash = dir.path().join("products.json");
        std::fs::create_dir(&clash).unwrap();

        let backend = JsonFileBackend::new(&clash);
        let err = backend.save("[]").unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageWriteFailed);
    }
}
