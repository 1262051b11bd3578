//! # booster-core
//!
//! Core crate for the Booster catalog API. Contains configuration schemas,
//! the object store trait, shared value types such as slugs, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Booster crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
