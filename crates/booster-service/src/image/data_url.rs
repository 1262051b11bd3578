//! Parsing of base64 `data:` URLs carrying image uploads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

use booster_core::error::AppError;

/// The decoded payload of a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    /// Lower-cased `type/subtype`, parameters stripped.
    pub mime_type: String,
    /// Decoded bytes.
    pub data: Bytes,
}

/// Parses `data:<type>/<subtype>[;param...];base64,<payload>`.
///
/// Only `image/*` types are accepted and the payload must be non-empty.
/// Every failure is reported against the `content` field.
pub fn parse_data_url(input: &str) -> Result<DataUrl, AppError> {
    let invalid = || AppError::invalid_field("content");

    let rest = input
        .trim()
        .strip_prefix("data:")
        .ok_or_else(invalid)?;
    let (header, payload) = rest.split_once(',').ok_or_else(invalid)?;

    let mut parts = header.split(';');
    let mime_type = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
    let is_base64 = parts.any(|p| p.trim().eq_ignore_ascii_case("base64"));
    if !is_base64 {
        return Err(invalid());
    }

    let (kind, subtype) = mime_type.split_once('/').ok_or_else(invalid)?;
    if kind != "image" || subtype.is_empty() {
        return Err(invalid());
    }

    let cleaned: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let data = STANDARD.decode(cleaned.as_bytes()).map_err(|_| invalid())?;
    if data.is_empty() {
        return Err(invalid());
    }

    Ok(DataUrl {
        mime_type,
        data: Bytes::from(data),
    })
}
