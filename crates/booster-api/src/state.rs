//! Shared application state passed to every handler.

use std::sync::Arc;

use sqlx::PgPool;

use booster_core::config::AppConfig;
use booster_core::traits::storage::ObjectStore;
use booster_service::{BrandService, ImageService, ProductService, UserService};

use crate::middleware::instance::InstanceInfo;

/// Everything a handler may need. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Database pool, used directly for health checks.
    pub db_pool: PgPool,
    /// Image blob store.
    pub object_store: Arc<dyn ObjectStore>,
    /// Identity reported in response headers.
    pub instance: Arc<InstanceInfo>,

    /// Accounts, logins and tokens.
    pub user_service: Arc<UserService>,
    /// Brands and membership.
    pub brand_service: Arc<BrandService>,
    /// Products and models.
    pub product_service: Arc<ProductService>,
    /// Product images.
    pub image_service: Arc<ImageService>,
}
