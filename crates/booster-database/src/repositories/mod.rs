//! Repository implementations for all Booster entities.

pub mod audit;
pub mod brand;
pub mod image;
pub mod onboarding;
pub mod product;
pub mod product_model;
pub mod token;
pub mod user;

pub use audit::AuditLogRepository;
pub use brand::BrandRepository;
pub use image::ImageRepository;
pub use onboarding::OnboardingRepository;
pub use product::ProductRepository;
pub use product_model::ProductModelRepository;
pub use token::AccessTokenRepository;
pub use user::UserRepository;
