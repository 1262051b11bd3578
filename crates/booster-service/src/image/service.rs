//! Image service.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use booster_core::error::AppError;
use booster_core::traits::storage::{ByteStream, ObjectStore};
use booster_database::repositories::{ImageRepository, ProductModelRepository, ProductRepository};
use booster_entity::audit::{LogAction, RefType};
use booster_entity::image::{CreateImage, Image, ImagePriority};
use booster_entity::product::Product;
use booster_storage::{extension_for_mime, image_key};

use super::data_url::parse_data_url;
use crate::audit::{AuditService, snapshot};
use crate::context::RequestContext;

/// Input for uploading an image.
#[derive(Debug, Clone)]
pub struct NewImage {
    /// Display name; defaults to the stored file name.
    pub name: Option<String>,
    /// Base64 `data:` URL holding the image.
    pub content: String,
    /// Product model the image illustrates.
    pub model_id: Option<Uuid>,
}

/// An image ready to be streamed back to a client.
pub struct ImageDownload {
    /// The image row.
    pub image: Image,
    /// Size of the stored blob.
    pub size_bytes: u64,
    /// The blob contents.
    pub stream: ByteStream,
}

/// Partial image update.
#[derive(Debug, Clone, Default)]
pub struct ImageChanges {
    /// New display name.
    pub name: Option<String>,
    /// New priority; `primary` demotes the current primary image.
    pub priority: Option<ImagePriority>,
}

/// Keeps image rows and their blobs in step.
#[derive(Debug, Clone)]
pub struct ImageService {
    images: Arc<ImageRepository>,
    products: Arc<ProductRepository>,
    models: Arc<ProductModelRepository>,
    store: Arc<dyn ObjectStore>,
    audit: Arc<AuditService>,
}

impl ImageService {
    /// Creates a new image service.
    pub fn new(
        images: Arc<ImageRepository>,
        products: Arc<ProductRepository>,
        models: Arc<ProductModelRepository>,
        store: Arc<dyn ObjectStore>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            images,
            products,
            models,
            store,
            audit,
        }
    }

    /// Loads an image row or fails with not-found.
    pub async fn get(&self, image_id: Uuid) -> Result<Image, AppError> {
        self.images
            .find_by_id(image_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Image {image_id} not found")))
    }

    /// The image row, the stored blob size and a stream over the blob.
    pub async fn download(&self, image_id: Uuid) -> Result<ImageDownload, AppError> {
        let image = self.get(image_id).await?;
        let meta = self.store.head(&image.storage_key).await?;
        let stream = self.store.get(&image.storage_key).await?;
        Ok(ImageDownload {
            image,
            size_bytes: meta.size_bytes,
            stream,
        })
    }

    async fn product_for(&self, ctx: &RequestContext, product_id: Uuid) -> Result<Product, AppError> {
        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {product_id} not found")))?;
        ctx.require_brand(product.brand_id)?;
        Ok(product)
    }

    /// Stores an uploaded image. Requires access to the product's brand.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
        req: NewImage,
    ) -> Result<Image, AppError> {
        let product = self.product_for(ctx, product_id).await?;
        let content = parse_data_url(&req.content)?;

        if let Some(model_id) = req.model_id {
            let belongs = self
                .models
                .find_by_id(model_id)
                .await?
                .is_some_and(|m| m.product_id == product.id);
            if !belongs {
                return Err(AppError::invalid_field("modelId"));
            }
        }

        let image_id = Uuid::new_v4();
        let key = image_key(product.id, image_id, &content.mime_type);
        let name = req
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("{image_id}.{}", extension_for_mime(&content.mime_type)));
        let size_bytes = content.data.len() as i64;

        self.store
            .put(&key, content.data, &content.mime_type)
            .await?;

        let created = self
            .images
            .create(&CreateImage {
                id: image_id,
                product_id: product.id,
                model_id: req.model_id,
                name,
                mime_type: content.mime_type,
                storage_key: key.clone(),
                size_bytes,
            })
            .await;

        let image = match created {
            Ok(image) => image,
            Err(e) => {
                if let Err(cleanup) = self.store.delete(&key).await {
                    warn!(key = %key, error = %cleanup, "Failed to remove orphaned image blob");
                }
                return Err(e);
            }
        };

        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::Image,
                image.id,
                LogAction::Create,
                None,
                snapshot(&image),
            )
            .await;

        info!(
            image_id = %image.id,
            product_id = %product.id,
            bytes = image.size_bytes,
            "Image uploaded"
        );
        Ok(image)
    }

    /// Renames or re-prioritizes an image. Requires access to the product's brand.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        image_id: Uuid,
        req: ImageChanges,
    ) -> Result<Image, AppError> {
        let before = self.get(image_id).await?;
        self.product_for(ctx, before.product_id).await?;

        let name = match req.name.as_deref().map(str::trim) {
            Some("") => return Err(AppError::invalid_field("name")),
            other => other,
        };

        let after = self.images.update(image_id, name, req.priority).await?;
        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::Image,
                image_id,
                LogAction::Update,
                snapshot(&before),
                snapshot(&after),
            )
            .await;

        info!(image_id = %image_id, priority = %after.priority, "Image updated");
        Ok(after)
    }

    /// Deletes an image row and its blob. Requires access to the product's brand.
    pub async fn delete(&self, ctx: &RequestContext, image_id: Uuid) -> Result<(), AppError> {
        let image = self.get(image_id).await?;
        self.product_for(ctx, image.product_id).await?;

        self.images.delete(image.id).await?;
        if let Err(e) = self.store.delete(&image.storage_key).await {
            warn!(
                image_id = %image.id,
                key = %image.storage_key,
                error = %e,
                "Failed to delete image blob"
            );
        }

        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::Image,
                image.id,
                LogAction::Delete,
                snapshot(&image),
                None,
            )
            .await;

        info!(image_id = %image.id, "Image deleted");
        Ok(())
    }
}
