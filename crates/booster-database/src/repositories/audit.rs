//! Audit log repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use booster_core::error::{AppError, ErrorKind};
use booster_core::result::AppResult;
use booster_entity::audit::{CreateLogEntry, LogEntry, RefType};

const SELECT_WITH_ACTOR: &str = "SELECT l.id, l.seq, l.ref_type, l.ref_id, l.user_id, \
     u.name AS actor_name, u.email AS actor_email, \
     l.action, l.from_state, l.to_state, l.created_at \
     FROM audit_logs l LEFT JOIN users u ON u.id = l.user_id";

/// Repository for audit log entries. Entries are append-only.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new audit log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an entry and return its id.
    pub async fn create(&self, data: &CreateLogEntry) -> AppResult<Uuid> {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO audit_logs (ref_type, ref_id, user_id, action, from_state, to_state) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(data.ref_type)
        .bind(data.ref_id)
        .bind(data.user_id)
        .bind(data.action)
        .bind(&data.from_state)
        .bind(&data.to_state)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to write audit entry", e))
    }

    /// List the entries about one entity in insertion order.
    pub async fn find_by_ref(&self, ref_type: RefType, ref_id: Uuid) -> AppResult<Vec<LogEntry>> {
        sqlx::query_as::<_, LogEntry>(&format!(
            "{SELECT_WITH_ACTOR} WHERE l.ref_type = $1 AND l.ref_id = $2 ORDER BY l.seq ASC"
        ))
        .bind(ref_type)
        .bind(ref_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list audit entries", e))
    }
}
