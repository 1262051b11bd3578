//! Access token repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use booster_core::error::{AppError, ErrorKind};
use booster_core::result::AppResult;
use booster_entity::token::AccessToken;

/// Repository for issued bearer tokens.
#[derive(Debug, Clone)]
pub struct AccessTokenRepository {
    pool: PgPool,
}

impl AccessTokenRepository {
    /// Create a new access token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a newly issued token.
    pub async fn create(
        &self,
        id: Uuid,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> AppResult<AccessToken> {
        sqlx::query_as::<_, AccessToken>(
            "INSERT INTO access_tokens (id, user_id, expires_at) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store access token", e))
    }

    /// Find a token that has not expired yet.
    pub async fn find_active(&self, id: Uuid) -> AppResult<Option<AccessToken>> {
        sqlx::query_as::<_, AccessToken>(
            "SELECT * FROM access_tokens WHERE id = $1 AND expires_at > NOW()",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find access token", e))
    }

    /// Revoke one token.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM access_tokens WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to revoke access token", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete expired tokens and return how many were removed.
    pub async fn delete_expired(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM access_tokens WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge expired tokens", e)
            })?;
        Ok(result.rows_affected())
    }
}
