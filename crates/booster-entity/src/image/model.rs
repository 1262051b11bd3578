//! Image entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::priority::ImagePriority;

/// Metadata of an image blob attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Unique image identifier, also the blob's base name.
    pub id: Uuid,
    /// Product the image illustrates.
    pub product_id: Uuid,
    /// Optional product model the image illustrates.
    pub model_id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// MIME type of the blob.
    pub mime_type: String,
    /// Ordering hint; at most one primary image per product.
    pub priority: ImagePriority,
    /// Key of the blob in the object store.
    pub storage_key: String,
    /// Blob size in bytes.
    pub size_bytes: i64,
    /// When the image was uploaded.
    pub created_at: DateTime<Utc>,
}

/// Data required to register an uploaded image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateImage {
    /// Pre-generated identifier matching the blob key.
    pub id: Uuid,
    /// Product the image illustrates.
    pub product_id: Uuid,
    /// Optional product model.
    pub model_id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// MIME type.
    pub mime_type: String,
    /// Object store key.
    pub storage_key: String,
    /// Blob size in bytes.
    pub size_bytes: i64,
}
