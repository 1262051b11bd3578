//! Product entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A catalog product owned by a brand.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// URL slug derived from the name.
    pub slug: String,
    /// Owning brand.
    pub brand_id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// ISO 4217 currency code, upper-case.
    pub currency: String,
    /// Price in minor units of `currency`.
    pub price: i64,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    /// Owning brand.
    pub brand_id: Uuid,
    /// Display name.
    pub name: String,
    /// Slug derived from `name`.
    pub slug: String,
    /// Description.
    pub description: String,
    /// Currency code.
    pub currency: String,
    /// Price in minor units.
    pub price: i64,
}

/// Partial product update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    /// New display name.
    pub name: Option<String>,
    /// New slug, set together with `name`.
    pub slug: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New currency code.
    pub currency: Option<String>,
    /// New price in minor units.
    pub price: Option<i64>,
}
