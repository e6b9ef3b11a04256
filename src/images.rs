//! Menu item pictures are embedded, not uploaded: a locally selected file
//! becomes a `data:` URI that the item stores as its image reference.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported image extension: {0}")]
    UnsupportedExtension(String),
}

pub fn file_to_data_uri(path: &Path) -> Result<String, ImageError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        other => return Err(ImageError::UnsupportedExtension(other.to_string())),
    };

    let bytes = fs::read(path)?;
    Ok(format!("data:{};base64,{}", mime, BASE64.encode(bytes)))
}
