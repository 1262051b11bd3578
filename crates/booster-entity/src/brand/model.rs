//! Brand entity model and membership rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::user::User;

/// An organization owning products. Members may manage its catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Unique brand identifier.
    pub id: Uuid,
    /// URL slug derived from the name.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Whether an admin has verified the brand.
    pub verified: bool,
    /// When the brand was created.
    pub created_at: DateTime<Utc>,
    /// When the brand was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A user joined with the brand it is a member of.
#[derive(Debug, Clone, FromRow)]
pub struct BrandMember {
    /// The brand the user belongs to.
    pub brand_id: Uuid,
    /// The member.
    #[sqlx(flatten)]
    pub user: User,
}

/// Data required to create a brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBrand {
    /// Display name.
    pub name: String,
    /// Slug derived from `name`.
    pub slug: String,
}

/// Partial brand update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBrand {
    /// New display name.
    pub name: Option<String>,
    /// New slug, set together with `name`.
    pub slug: Option<String>,
    /// New verification flag.
    pub verified: Option<bool>,
}
