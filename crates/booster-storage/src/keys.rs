//! Object key layout for product images.

use uuid::Uuid;

/// File extension used when storing an object of the given mime type.
///
/// Common image types map to their conventional extension; anything else
/// falls back to the first extension known to `mime_guess`, then `bin`.
pub fn extension_for_mime(mime: &str) -> String {
    let mime = mime.trim().to_ascii_lowercase();
    let known = match mime.as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/svg+xml" => Some("svg"),
        _ => None,
    };
    if let Some(ext) = known {
        return ext.to_string();
    }

    mime_guess::get_mime_extensions_str(&mime)
        .and_then(|exts| exts.first())
        .map(|ext| ext.to_string())
        .unwrap_or_else(|| "bin".to_string())
}

/// Key of an image blob: `products/{productId}/{imageId}.{ext}`.
pub fn image_key(product_id: Uuid, image_id: Uuid, mime: &str) -> String {
    format!(
        "products/{product_id}/{image_id}.{}",
        extension_for_mime(mime)
    )
}
