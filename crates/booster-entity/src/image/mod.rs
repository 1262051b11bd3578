//! Product image entities.

pub mod model;
pub mod priority;

pub use model::{CreateImage, Image};
pub use priority::ImagePriority;
