//! Object store trait for image blob backends.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// Metadata about a stored object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ObjectMeta {
    /// Object key.
    pub key: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Content type recorded with the object, if any.
    pub content_type: Option<String>,
}

/// A byte stream type used for reading object contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for key/value blob stores.
///
/// Implementations exist for S3-compatible services and the local
/// filesystem. Keys are `/`-separated relative paths. A missing key is
/// reported as a `NotFound` error by `get` and `head`;
/// `delete` of a missing key succeeds.
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store `data` under `key`, replacing any previous object.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()>;

    /// Open the object stored under `key` as a byte stream.
    async fn get(&self, key: &str) -> AppResult<ByteStream>;

    /// Fetch metadata for `key`.
    async fn head(&self, key: &str) -> AppResult<ObjectMeta>;

    /// Delete the object stored under `key`.
    async fn delete(&self, key: &str) -> AppResult<()>;
}
