//! HTTP request handlers, one module per resource.

pub mod brands;
pub mod images;
pub mod products;
pub mod status;
pub mod users;
