//! Access token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side record of an issued bearer token. Deleting the row
/// revokes the token.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    /// Token identifier, carried as the JWT `jti` claim.
    pub id: Uuid,
    /// Owner of the token.
    pub user_id: Uuid,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Check whether the token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
