//! Product image repository.

use sqlx::PgPool;
use uuid::Uuid;

use booster_core::error::{AppError, ErrorKind};
use booster_core::result::AppResult;
use booster_entity::image::{CreateImage, Image, ImagePriority};

/// Repository for image metadata rows.
#[derive(Debug, Clone)]
pub struct ImageRepository {
    pool: PgPool,
}

impl ImageRepository {
    /// Create a new image repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an image by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Image>> {
        sqlx::query_as::<_, Image>("SELECT * FROM images WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find image", e))
    }

    /// List the images of a product, primary first.
    pub async fn find_by_product(&self, product_id: Uuid) -> AppResult<Vec<Image>> {
        sqlx::query_as::<_, Image>(
            "SELECT * FROM images WHERE product_id = $1 \
             ORDER BY priority ASC, created_at ASC",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list images", e))
    }

    /// List every image of every product of a brand.
    pub async fn find_by_brand(&self, brand_id: Uuid) -> AppResult<Vec<Image>> {
        sqlx::query_as::<_, Image>(
            "SELECT i.* FROM images i \
             JOIN products p ON p.id = i.product_id \
             WHERE p.brand_id = $1",
        )
        .bind(brand_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list brand images", e)
        })
    }

    /// Register an uploaded image.
    pub async fn create(&self, data: &CreateImage) -> AppResult<Image> {
        sqlx::query_as::<_, Image>(
            "INSERT INTO images (id, product_id, model_id, name, mime_type, storage_key, size_bytes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.id)
        .bind(data.product_id)
        .bind(data.model_id)
        .bind(&data.name)
        .bind(&data.mime_type)
        .bind(&data.storage_key)
        .bind(data.size_bytes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("images_model_id_fkey") =>
            {
                AppError::invalid_field("modelId")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create image", e),
        })
    }

    /// Rename an image and/or change its priority.
    ///
    /// Promoting an image to primary demotes the product's current primary
    /// image in the same transaction. The product row is locked first so
    /// concurrent promotions on one product run one after the other.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        priority: Option<ImagePriority>,
    ) -> AppResult<Image> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        if priority == Some(ImagePriority::Primary) {
            sqlx::query(
                "SELECT id FROM products \
                 WHERE id = (SELECT product_id FROM images WHERE id = $1) \
                 FOR UPDATE",
            )
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to lock product", e)
            })?;

            sqlx::query(
                "UPDATE images SET priority = 'secondary' \
                 WHERE product_id = (SELECT product_id FROM images WHERE id = $1) \
                   AND priority = 'primary' AND id <> $1",
            )
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to demote primary image", e)
            })?;
        }

        let image = sqlx::query_as::<_, Image>(
            "UPDATE images SET name = COALESCE($2, name), \
                               priority = COALESCE($3, priority) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(priority)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("images_primary_per_product_key") =>
            {
                AppError::conflict("Another image of this product was promoted concurrently")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update image", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Image {id} not found")))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit image update", e)
        })?;

        Ok(image)
    }

    /// Delete an image row.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete image", e))?;

        Ok(result.rows_affected() > 0)
    }
}
