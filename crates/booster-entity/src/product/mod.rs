//! Product domain entities.

pub mod model;
pub mod variant;

pub use model::{CreateProduct, Product, UpdateProduct};
pub use variant::ProductModel;
