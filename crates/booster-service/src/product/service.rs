//! Product service.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use booster_core::error::AppError;
use booster_core::traits::storage::ObjectStore;
use booster_core::types::slugify;
use booster_database::repositories::{
    BrandRepository, ImageRepository, ProductModelRepository, ProductRepository,
};
use booster_entity::audit::{LogAction, LogEntry, RefType};
use booster_entity::brand::Brand;
use booster_entity::image::Image;
use booster_entity::product::{CreateProduct, Product, ProductModel, UpdateProduct};

use crate::audit::{AuditService, snapshot};
use crate::context::RequestContext;

/// A product with its brand, models and images.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductDetails {
    /// The product.
    #[serde(flatten)]
    pub product: Product,
    /// Owning brand.
    pub brand: Brand,
    /// Product variants.
    pub models: Vec<ProductModel>,
    /// Images, primary first.
    pub images: Vec<Image>,
}

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Owning brand.
    pub brand_id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Price in minor units.
    pub price: i64,
}

/// Partial product update.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    /// New name; the slug follows it.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New currency code.
    pub currency: Option<String>,
    /// New price in minor units.
    pub price: Option<i64>,
}

/// Manages products and product models.
#[derive(Debug, Clone)]
pub struct ProductService {
    products: Arc<ProductRepository>,
    models: Arc<ProductModelRepository>,
    brands: Arc<BrandRepository>,
    images: Arc<ImageRepository>,
    store: Arc<dyn ObjectStore>,
    audit: Arc<AuditService>,
}

/// Upper-cases a three letter currency code, rejecting anything else.
pub fn normalize_currency(currency: &str) -> Result<String, AppError> {
    let code = currency.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(AppError::invalid_field("currency"))
    }
}

fn checked_name(name: &str) -> Result<(String, String), AppError> {
    let name = name.trim();
    let slug = slugify(name);
    if name.is_empty() || slug.is_empty() {
        return Err(AppError::invalid_field("name"));
    }
    Ok((name.to_string(), slug))
}

fn checked_price(price: i64) -> Result<i64, AppError> {
    if price < 0 {
        return Err(AppError::invalid_field("price"));
    }
    Ok(price)
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(
        products: Arc<ProductRepository>,
        models: Arc<ProductModelRepository>,
        brands: Arc<BrandRepository>,
        images: Arc<ImageRepository>,
        store: Arc<dyn ObjectStore>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            products,
            models,
            brands,
            images,
            store,
            audit,
        }
    }

    /// Loads a product or fails with not-found.
    pub async fn get(&self, product_id: Uuid) -> Result<Product, AppError> {
        self.products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {product_id} not found")))
    }

    /// A product with its brand, models and images.
    pub async fn details(&self, product_id: Uuid) -> Result<ProductDetails, AppError> {
        let product = self.get(product_id).await?;
        let brand = self
            .brands
            .find_by_id(product.brand_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Brand {} not found", product.brand_id)))?;
        let models = self.models.find_by_product(product.id).await?;
        let images = self.images.find_by_product(product.id).await?;

        Ok(ProductDetails {
            product,
            brand,
            models,
            images,
        })
    }

    /// A product and its audit trail. Requires access to its brand.
    pub async fn get_with_logs(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
    ) -> Result<(Product, Vec<LogEntry>), AppError> {
        let product = self.get(product_id).await?;
        ctx.require_brand(product.brand_id)?;
        let logs = self.audit.logs_for(RefType::Product, product.id).await?;
        Ok((product, logs))
    }

    /// Products of a brand.
    pub async fn list_by_brand(&self, brand_id: Uuid) -> Result<Vec<Product>, AppError> {
        if self.brands.find_by_id(brand_id).await?.is_none() {
            return Err(AppError::not_found(format!("Brand {brand_id} not found")));
        }
        self.products.find_by_brand(brand_id).await
    }

    /// Creates a product. Requires access to the target brand.
    pub async fn create(&self, ctx: &RequestContext, req: NewProduct) -> Result<Product, AppError> {
        if self.brands.find_by_id(req.brand_id).await?.is_none() {
            return Err(AppError::not_found(format!("Brand {} not found", req.brand_id)));
        }
        ctx.require_brand(req.brand_id)?;

        let (name, slug) = checked_name(&req.name)?;
        let product = self
            .products
            .create(&CreateProduct {
                brand_id: req.brand_id,
                name,
                slug,
                description: req.description,
                currency: normalize_currency(&req.currency)?,
                price: checked_price(req.price)?,
            })
            .await?;

        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::Product,
                product.id,
                LogAction::Create,
                None,
                snapshot(&product),
            )
            .await;

        info!(product_id = %product.id, brand_id = %product.brand_id, "Product created");
        Ok(product)
    }

    /// Updates a product. Requires access to its brand.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
        req: ProductChanges,
    ) -> Result<Product, AppError> {
        let before = self.get(product_id).await?;
        ctx.require_brand(before.brand_id)?;

        let mut changes = UpdateProduct {
            description: req.description,
            ..UpdateProduct::default()
        };
        if let Some(name) = req.name.as_deref() {
            let (name, slug) = checked_name(name)?;
            changes.name = Some(name);
            changes.slug = Some(slug);
        }
        if let Some(currency) = req.currency.as_deref() {
            changes.currency = Some(normalize_currency(currency)?);
        }
        if let Some(price) = req.price {
            changes.price = Some(checked_price(price)?);
        }

        let after = self.products.update(product_id, &changes).await?;
        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::Product,
                product_id,
                LogAction::Update,
                snapshot(&before),
                snapshot(&after),
            )
            .await;

        info!(product_id = %product_id, user_id = %ctx.user_id(), "Product updated");
        Ok(after)
    }

    /// Deletes a product with its models and images. Requires access to its brand.
    pub async fn delete(&self, ctx: &RequestContext, product_id: Uuid) -> Result<(), AppError> {
        let before = self.get(product_id).await?;
        ctx.require_brand(before.brand_id)?;

        let images = self.images.find_by_product(product_id).await?;
        if !self.products.delete(product_id).await? {
            return Err(AppError::not_found(format!("Product {product_id} not found")));
        }

        for image in &images {
            if let Err(e) = self.store.delete(&image.storage_key).await {
                warn!(
                    image_id = %image.id,
                    key = %image.storage_key,
                    error = %e,
                    "Failed to delete image blob"
                );
            }
        }

        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::Product,
                product_id,
                LogAction::Delete,
                snapshot(&before),
                None,
            )
            .await;

        info!(product_id = %product_id, images = images.len(), "Product deleted");
        Ok(())
    }

    /// Adds a model to a product. Requires access to its brand.
    pub async fn add_model(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
        name: &str,
    ) -> Result<ProductModel, AppError> {
        let product = self.get(product_id).await?;
        ctx.require_brand(product.brand_id)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_field("name"));
        }

        let model = self.models.create(product.id, name).await?;
        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::ProductModel,
                model.id,
                LogAction::Create,
                None,
                snapshot(&model),
            )
            .await;

        info!(model_id = %model.id, product_id = %product.id, "Product model created");
        Ok(model)
    }

    /// Deletes a product model. Images of the model stay on the product.
    pub async fn delete_model(&self, ctx: &RequestContext, model_id: Uuid) -> Result<(), AppError> {
        let model = self
            .models
            .find_by_id(model_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Model {model_id} not found")))?;
        let product = self.get(model.product_id).await?;
        ctx.require_brand(product.brand_id)?;

        self.models.delete(model.id).await?;
        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::ProductModel,
                model.id,
                LogAction::Delete,
                snapshot(&model),
                None,
            )
            .await;

        info!(model_id = %model.id, "Product model deleted");
        Ok(())
    }
}
