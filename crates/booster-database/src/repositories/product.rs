//! Product repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use booster_core::error::{AppError, ErrorKind};
use booster_core::result::AppResult;
use booster_entity::product::{CreateProduct, Product, UpdateProduct};

/// Repository for product CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a product by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find product", e))
    }

    /// List the products of a brand, oldest first.
    pub async fn find_by_brand(&self, brand_id: Uuid) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE brand_id = $1 ORDER BY created_at ASC",
        )
        .bind(brand_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))
    }

    /// Create a product.
    pub async fn create(&self, data: &CreateProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (brand_id, name, slug, description, currency, price) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.brand_id)
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.description)
        .bind(&data.currency)
        .bind(data.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("products_brand_id_fkey") =>
            {
                AppError::not_found(format!("Brand {} not found", data.brand_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create product", e),
        })
    }

    /// Apply a partial update.
    pub async fn update(&self, id: Uuid, data: &UpdateProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = COALESCE($2, name), \
                                 slug = COALESCE($3, slug), \
                                 description = COALESCE($4, description), \
                                 currency = COALESCE($5, currency), \
                                 price = COALESCE($6, price), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.description)
        .bind(&data.currency)
        .bind(data.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }

    /// Delete a product; models and image rows cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
