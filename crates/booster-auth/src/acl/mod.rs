//! Admin and brand membership checks.

pub mod checker;

pub use checker::BrandAccess;
