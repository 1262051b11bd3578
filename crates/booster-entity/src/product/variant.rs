//! Product model (variant) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A named variant of a product, e.g. a colour or size.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductModel {
    /// Unique model identifier.
    pub id: Uuid,
    /// Parent product.
    pub product_id: Uuid,
    /// Display name.
    pub name: String,
    /// When the model was created.
    pub created_at: DateTime<Utc>,
}
