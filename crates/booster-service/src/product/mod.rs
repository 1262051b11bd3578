//! Products and their models.

pub mod service;

pub use service::{NewProduct, ProductChanges, ProductDetails, ProductService};
