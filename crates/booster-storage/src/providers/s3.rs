//! S3-compatible object store (AWS S3, MinIO).

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream as S3Body;
use bytes::Bytes;
use tokio_util::io::ReaderStream;
use tracing::{debug, warn};

use booster_core::config::S3StorageConfig;
use booster_core::error::{AppError, ErrorKind};
use booster_core::result::AppResult;
use booster_core::traits::storage::{ByteStream, ObjectMeta, ObjectStore};

/// Object store backed by a single S3 bucket.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Build a client for the configured endpoint and bucket.
    ///
    /// Static credentials are used when both keys are set; otherwise the
    /// default AWS credential chain applies.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.trim().is_empty() {
            return Err(AppError::configuration("storage.s3.bucket must not be empty"));
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if !config.endpoint.is_empty() {
            loader = loader.endpoint_url(config.endpoint.clone());
        }
        if !config.access_key.is_empty() && !config.secret_key.is_empty() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "booster-config",
            ));
        }
        let shared_config = loader.load().await;

        let mut s3_builder = aws_sdk_s3::config::Builder::from(&shared_config);
        if config.force_path_style {
            s3_builder = s3_builder.force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(s3_builder.build()),
            bucket: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                warn!(bucket = %self.bucket, error = %e, "S3 bucket is not reachable");
                Ok(false)
            }
        }
    }

    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()> {
        let size = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(S3Body::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to upload object: {key}"),
                    e.into_service_error(),
                )
            })?;

        debug!(key, bytes = size, "Uploaded object");
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<ByteStream> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service = e.into_service_error();
                if service.is_no_such_key() {
                    AppError::not_found(format!("Object not found: {key}"))
                } else {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to download object: {key}"),
                        service,
                    )
                }
            })?;

        let reader = output.body.into_async_read();
        Ok(Box::pin(ReaderStream::new(reader)))
    }

    async fn head(&self, key: &str) -> AppResult<ObjectMeta> {
        let output = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service = e.into_service_error();
                if service.is_not_found() {
                    AppError::not_found(format!("Object not found: {key}"))
                } else {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to stat object: {key}"),
                        service,
                    )
                }
            })?;

        Ok(ObjectMeta {
            key: key.to_string(),
            size_bytes: output
                .content_length()
                .and_then(|len| u64::try_from(len).ok())
                .unwrap_or(0),
            content_type: output.content_type().map(str::to_string),
        })
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete object: {key}"),
                    e.into_service_error(),
                )
            })?;

        debug!(key, "Deleted object");
        Ok(())
    }
}
