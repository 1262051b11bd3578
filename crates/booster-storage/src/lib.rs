//! # booster-storage
//!
//! Object store implementations for Booster product images. Supports
//! S3-compatible services (AWS, MinIO) and the local filesystem.

pub mod factory;
pub mod keys;
pub mod providers;

pub use factory::build_object_store;
pub use keys::{extension_for_mime, image_key};
