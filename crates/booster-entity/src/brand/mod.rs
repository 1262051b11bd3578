//! Brand (organization) domain entities.

pub mod model;
pub mod onboarding;

pub use model::{Brand, BrandMember, CreateBrand, UpdateBrand};
pub use onboarding::OnboardingUser;
