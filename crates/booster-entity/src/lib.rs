//! # booster-entity
//!
//! Domain entity models for the Booster catalog. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod audit;
pub mod brand;
pub mod image;
pub mod product;
pub mod token;
pub mod user;
