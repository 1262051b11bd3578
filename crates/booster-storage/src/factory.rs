//! Builds the configured object store.

use std::sync::Arc;

use tracing::info;

use booster_core::config::{StorageConfig, StorageProviderKind};
#[cfg(not(feature = "s3"))]
use booster_core::error::AppError;
use booster_core::result::AppResult;
use booster_core::traits::storage::ObjectStore;

use crate::providers::LocalObjectStore;

/// Instantiate the object store selected by `storage.provider`.
pub async fn build_object_store(config: &StorageConfig) -> AppResult<Arc<dyn ObjectStore>> {
    match config.provider {
        StorageProviderKind::Local => {
            let store = LocalObjectStore::new(&config.local.root_path).await?;
            info!(root = %config.local.root_path, "Using local object store");
            Ok(Arc::new(store))
        }
        #[cfg(feature = "s3")]
        StorageProviderKind::S3 => {
            let store = crate::providers::S3ObjectStore::new(&config.s3).await?;
            info!(
                endpoint = %config.s3.endpoint,
                bucket = %config.s3.bucket,
                "Using S3 object store"
            );
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "s3"))]
        StorageProviderKind::S3 => Err(AppError::configuration(
            "booster-storage was built without the s3 feature",
        )),
    }
}
