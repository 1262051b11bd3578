//! Brand and brand membership repository.

use sqlx::PgPool;
use uuid::Uuid;

use booster_core::error::{AppError, ErrorKind};
use booster_core::result::AppResult;
use booster_entity::brand::{Brand, BrandMember, CreateBrand, UpdateBrand};
use booster_entity::user::User;

/// Repository for brands and the `brand_users` join table.
#[derive(Debug, Clone)]
pub struct BrandRepository {
    pool: PgPool,
}

impl BrandRepository {
    /// Create a new brand repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a brand by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Brand>> {
        sqlx::query_as::<_, Brand>("SELECT * FROM brands WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find brand", e))
    }

    /// List all brands, oldest first.
    pub async fn find_all(&self) -> AppResult<Vec<Brand>> {
        sqlx::query_as::<_, Brand>("SELECT * FROM brands ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list brands", e))
    }

    /// List the brands a user is a member of.
    pub async fn find_for_user(&self, user_id: Uuid) -> AppResult<Vec<Brand>> {
        sqlx::query_as::<_, Brand>(
            "SELECT b.* FROM brands b \
             JOIN brand_users bu ON bu.brand_id = b.id \
             WHERE bu.user_id = $1 \
             ORDER BY b.created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list brands for user", e)
        })
    }

    /// Create a brand.
    pub async fn create(&self, data: &CreateBrand) -> AppResult<Brand> {
        sqlx::query_as::<_, Brand>(
            "INSERT INTO brands (name, slug) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create brand", e))
    }

    /// Apply a partial update.
    pub async fn update(&self, id: Uuid, data: &UpdateBrand) -> AppResult<Brand> {
        sqlx::query_as::<_, Brand>(
            "UPDATE brands SET name = COALESCE($2, name), \
                               slug = COALESCE($3, slug), \
                               verified = COALESCE($4, verified), \
                               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.slug)
        .bind(data.verified)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update brand", e))?
        .ok_or_else(|| AppError::not_found(format!("Brand {id} not found")))
    }

    /// Delete a brand; memberships, invitations and products cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete brand", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// List the members of a brand in join order.
    pub async fn find_members(&self, brand_id: Uuid) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT u.* FROM users u \
             JOIN brand_users bu ON bu.user_id = u.id \
             WHERE bu.brand_id = $1 \
             ORDER BY bu.added_at ASC",
        )
        .bind(brand_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list brand members", e))
    }

    /// List the members of several brands at once.
    pub async fn find_members_of(&self, brand_ids: &[Uuid]) -> AppResult<Vec<BrandMember>> {
        sqlx::query_as::<_, BrandMember>(
            "SELECT bu.brand_id, u.* FROM users u \
             JOIN brand_users bu ON bu.user_id = u.id \
             WHERE bu.brand_id = ANY($1) \
             ORDER BY bu.added_at ASC",
        )
        .bind(brand_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list brand members", e))
    }

    /// IDs of the brands a user belongs to.
    pub async fn brand_ids_for_user(&self, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("SELECT brand_id FROM brand_users WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load user memberships", e)
            })
    }

    /// Add a member. Adding an existing member is a no-op.
    pub async fn add_member(&self, brand_id: Uuid, user_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO brand_users (brand_id, user_id) VALUES ($1, $2) \
             ON CONFLICT (brand_id, user_id) DO NOTHING",
        )
        .bind(brand_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add brand member", e))?;
        Ok(())
    }

    /// Replace the member set of a brand atomically.
    pub async fn replace_members(&self, brand_id: Uuid, user_ids: &[Uuid]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM brand_users WHERE brand_id = $1 AND user_id <> ALL($2)")
            .bind(brand_id)
            .bind(user_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to remove brand members", e)
            })?;

        sqlx::query(
            "INSERT INTO brand_users (brand_id, user_id) \
             SELECT $1, UNNEST($2::uuid[]) \
             ON CONFLICT (brand_id, user_id) DO NOTHING",
        )
        .bind(brand_id)
        .bind(user_ids)
        .execute(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("brand_users_user_id_fkey") =>
            {
                AppError::validation("Unknown user in brand members").with_field("users")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to add brand members", e),
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit brand members", e)
        })
    }
}
