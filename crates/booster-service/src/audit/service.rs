//! Audit log service.

use std::sync::Arc;

use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use booster_core::error::AppError;
use booster_database::repositories::AuditLogRepository;
use booster_entity::audit::{CreateLogEntry, LogAction, LogEntry, RefType};

/// Records who changed what, with before/after snapshots.
#[derive(Debug, Clone)]
pub struct AuditService {
    repo: Arc<AuditLogRepository>,
}

impl AuditService {
    /// Creates a new audit service.
    pub fn new(repo: Arc<AuditLogRepository>) -> Self {
        Self { repo }
    }

    /// Append an entry.
    ///
    /// A failed write is logged and swallowed: the change it describes has
    /// already been committed.
    pub async fn record(
        &self,
        actor: Option<Uuid>,
        ref_type: RefType,
        ref_id: Uuid,
        action: LogAction,
        from_state: Option<serde_json::Value>,
        to_state: Option<serde_json::Value>,
    ) {
        let entry = CreateLogEntry {
            ref_type,
            ref_id,
            user_id: actor,
            action,
            from_state,
            to_state,
        };

        if let Err(e) = self.repo.create(&entry).await {
            error!(
                ref_type = %ref_type,
                ref_id = %ref_id,
                action = %action,
                error = %e,
                "Failed to write audit entry"
            );
        }
    }

    /// Entries about one entity, oldest first.
    pub async fn logs_for(&self, ref_type: RefType, ref_id: Uuid) -> Result<Vec<LogEntry>, AppError> {
        self.repo.find_by_ref(ref_type, ref_id).await
    }
}

/// JSON snapshot of an entity for `from_state` / `to_state`.
pub fn snapshot<T: Serialize + ?Sized>(value: &T) -> Option<serde_json::Value> {
    match serde_json::to_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            error!(error = %e, "Failed to serialize audit snapshot");
            None
        }
    }
}
