//! # booster-service
//!
//! Business logic for the Booster catalog. Services sit between the HTTP
//! handlers and the repositories: they enforce access rules, derive slugs,
//! keep image blobs in step with their rows, and write the audit log.

pub mod audit;
pub mod brand;
pub mod context;
pub mod image;
pub mod product;
pub mod user;

pub use audit::AuditService;
pub use brand::BrandService;
pub use context::RequestContext;
pub use image::ImageService;
pub use product::ProductService;
pub use user::UserService;
