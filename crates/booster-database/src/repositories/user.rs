//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use booster_core::error::{AppError, ErrorKind};
use booster_core::result::AppResult;
use booster_entity::user::{CreateUser, User};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List all users, oldest first.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Create a new user and redeem the pending brand invitations for its
    /// email in one transaction. Returns the user and the brands it joined.
    ///
    /// Invitations removed concurrently (for instance by deleting their
    /// brand) are skipped rather than failing the registration.
    pub async fn create(&self, data: &CreateUser) -> AppResult<(User, Vec<Uuid>)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, is_admin) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.is_admin)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already in use").with_field("email")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })?;

        let brand_ids: Vec<Uuid> = sqlx::query_scalar(
            "DELETE FROM onboarding_users WHERE LOWER(email) = LOWER($1) RETURNING brand_id",
        )
        .bind(&user.email)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to redeem invitations", e)
        })?;

        if !brand_ids.is_empty() {
            sqlx::query(
                "INSERT INTO brand_users (brand_id, user_id) \
                 SELECT id, $2 FROM brands WHERE id = ANY($1) \
                 ON CONFLICT (brand_id, user_id) DO NOTHING",
            )
            .bind(&brand_ids)
            .bind(user.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to join invited brands", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit user creation", e)
        })?;

        Ok((user, brand_ids))
    }

    /// Grant or revoke the admin flag.
    pub async fn set_admin(&self, user_id: Uuid, is_admin: bool) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET is_admin = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(is_admin)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update admin flag", e))?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }
}
