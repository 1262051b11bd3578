//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use booster_entity::audit::LogEntry;
use booster_entity::brand::Brand;
use booster_entity::image::Image;
use booster_entity::product::{Product, ProductModel};
use booster_entity::user::User;
use booster_service::brand::BrandWithMembers;
use booster_service::product::ProductDetails;
use booster_service::user::UserWithBrands;

/// Body of `GET /v1/status`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Always true while the process serves requests.
    pub status: bool,
}

/// Body of `GET /v1/status/health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// True when every dependency is reachable.
    pub status: bool,
    /// Database reachability.
    pub database: bool,
    /// Object store reachability.
    pub storage: bool,
    /// Deployed version (`BOOSTER_VERSION`).
    pub version: String,
}

/// Bare acknowledgement for mutations without a payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Always true.
    pub success: bool,
}

impl SuccessResponse {
    /// The only value this type takes.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Registration result.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Always true.
    pub success: bool,
    /// The new account.
    pub user: User,
}

/// Login result.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Always true.
    pub success: bool,
    /// The authenticated user.
    pub user: User,
    /// Token for the `Authorization: Bearer` header.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
}

/// A single account with its brands.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// The account.
    pub user: UserWithBrands,
}

/// Every account with its brands.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsersResponse {
    /// Accounts.
    pub users: Vec<UserWithBrands>,
}

/// An account with the audit entries it is the subject of.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserLogsResponse {
    /// The account.
    pub user: UserWithBrands,
    /// Audit entries, oldest first.
    pub logs: Vec<LogEntry>,
}

/// Every brand with its members.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BrandsResponse {
    /// Brands.
    pub brands: Vec<BrandWithMembers>,
}

/// Brands the caller belongs to.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MyBrandsResponse {
    /// Brands.
    pub brands: Vec<Brand>,
}

/// A newly created brand.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedBrandResponse {
    /// Always true.
    pub success: bool,
    /// The brand.
    pub brand: Brand,
}

/// A brand with its members.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BrandResponse {
    /// The brand.
    pub brand: BrandWithMembers,
}

/// A brand after a partial update.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdatedBrandResponse {
    /// Always true.
    pub success: bool,
    /// The brand.
    pub brand: BrandWithMembers,
}

/// A brand with its audit trail.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BrandLogsResponse {
    /// The brand.
    pub brand: Brand,
    /// Audit entries, oldest first.
    pub logs: Vec<LogEntry>,
}

/// Outcome of a brand invitation.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InviteResponse {
    /// `user added` or `onboarding sent`.
    pub message: String,
    /// Human readable explanation.
    pub info: String,
    /// The brand after the invitation.
    pub brand: BrandWithMembers,
    /// Pending invitation, when the email has no account yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_id: Option<Uuid>,
}

/// A product with its brand, models and images.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductDetailsResponse {
    /// The product.
    pub product: ProductDetails,
}

/// A product with its audit trail.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductLogsResponse {
    /// The product.
    pub product: Product,
    /// Audit entries, oldest first.
    pub logs: Vec<LogEntry>,
}

/// Products of one brand.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductsResponse {
    /// Products.
    pub products: Vec<Product>,
}

/// A product after creation or update.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SavedProductResponse {
    /// Always true.
    pub success: bool,
    /// The product.
    pub product: Product,
}

/// A newly created product model.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ModelResponse {
    /// Always true.
    pub success: bool,
    /// The model.
    pub model: ProductModel,
}

/// Image metadata after upload or update.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImageResponse {
    /// The image.
    pub image: Image,
}
