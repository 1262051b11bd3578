//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::action::{LogAction, RefType};

/// An immutable audit log entry, joined with its actor's public fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// Insertion sequence; entries are listed in this order.
    pub seq: i64,
    /// Kind of the referenced entity.
    pub ref_type: RefType,
    /// Identifier of the referenced entity.
    pub ref_id: Uuid,
    /// The user who performed the action, if known.
    pub user_id: Option<Uuid>,
    /// Actor's name at read time.
    pub actor_name: Option<String>,
    /// Actor's email at read time.
    pub actor_email: Option<String>,
    /// What happened.
    pub action: LogAction,
    /// Snapshot before the change.
    #[schema(value_type = Option<Object>)]
    pub from_state: Option<serde_json::Value>,
    /// Snapshot after the change.
    #[schema(value_type = Option<Object>)]
    pub to_state: Option<serde_json::Value>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to append an audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLogEntry {
    /// Kind of the referenced entity.
    pub ref_type: RefType,
    /// Identifier of the referenced entity.
    pub ref_id: Uuid,
    /// Acting user.
    pub user_id: Option<Uuid>,
    /// What happened.
    pub action: LogAction,
    /// Snapshot before the change.
    #[schema(value_type = Option<Object>)]
    pub from_state: Option<serde_json::Value>,
    /// Snapshot after the change.
    #[schema(value_type = Option<Object>)]
    pub to_state: Option<serde_json::Value>,
}
