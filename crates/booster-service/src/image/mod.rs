//! Product image upload, download and maintenance.

pub mod data_url;
pub mod service;

pub use data_url::{DataUrl, parse_data_url};
pub use service::{ImageChanges, ImageDownload, ImageService, NewImage};
