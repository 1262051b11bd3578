//! Pending brand invitations for people without an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An invitation to join a brand, redeemed when the email registers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingUser {
    /// Invitation identifier.
    pub id: Uuid,
    /// Invited email address.
    pub email: String,
    /// Brand the invitee will join.
    pub brand_id: Uuid,
    /// When the invitation was sent.
    pub created_at: DateTime<Utc>,
}
