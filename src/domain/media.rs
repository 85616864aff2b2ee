//! Inline image encoding for `imageUrl` fields.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// Encodes `bytes` as a `data:` URI.
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Picks an image MIME type from the file extension.
pub fn guess_image_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Reads an image file and returns it as a `data:` URI.
pub async fn file_to_data_uri(path: impl AsRef<Path>) -> std::io::Result<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    Ok(to_data_uri(guess_image_mime(path), &bytes))
}

/// True when the value embeds its image rather than pointing at one.
pub fn is_data_uri(image_url: &str) -> bool {
    image_url.starts_with("data:")
}
