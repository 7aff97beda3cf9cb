//! Product image encoding
//!
//! One uploaded image per record, embedded as a `data:` URL so the
//! persisted collection stays a single self-sufficient blob with no
//! references to external storage.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use shared::{AppError, AppResult};
use std::path::Path;

/// Encode raw image bytes into a self-contained data URL
///
/// The MIME type is guessed from the file name; unknown extensions fall
/// back to `application/octet-stream`.
pub fn encode_image(bytes: &[u8], file_name: &str) -> String {
    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes))
}

/// Read an image file and encode it into a data URL
pub fn encode_image_file(path: &Path) -> AppResult<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        AppError::validation(format!("failed to read image {}: {e}", path.display()))
    })?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    Ok(encode_image(&bytes, file_name))
}
