//! Product model (variant) repository.

use sqlx::PgPool;
use uuid::Uuid;

use booster_core::error::{AppError, ErrorKind};
use booster_core::result::AppResult;
use booster_entity::product::ProductModel;

/// Repository for `product_models`.
#[derive(Debug, Clone)]
pub struct ProductModelRepository {
    pool: PgPool,
}

impl ProductModelRepository {
    /// Create a new product model repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a model by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProductModel>> {
        sqlx::query_as::<_, ProductModel>("SELECT * FROM product_models WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find product model", e)
            })
    }

    /// List the models of a product.
    pub async fn find_by_product(&self, product_id: Uuid) -> AppResult<Vec<ProductModel>> {
        sqlx::query_as::<_, ProductModel>(
            "SELECT * FROM product_models WHERE product_id = $1 ORDER BY created_at ASC",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list product models", e)
        })
    }

    /// Create a model.
    pub async fn create(&self, product_id: Uuid, name: &str) -> AppResult<ProductModel> {
        sqlx::query_as::<_, ProductModel>(
            "INSERT INTO product_models (product_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(product_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create product model", e)
        })
    }

    /// Delete a model. Images pointing at it are kept and detached.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM product_models WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product model", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
