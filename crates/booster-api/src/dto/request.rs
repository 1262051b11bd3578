//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use booster_entity::image::ImagePriority;

/// `{ "id": ... }` reference to another entity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IdRef {
    /// Referenced ID.
    pub id: Uuid,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    /// The account to create.
    #[validate(nested)]
    pub user: RegisterUserBody,
}

/// Account fields for registration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterUserBody {
    /// Display name.
    #[validate(length(min = 2))]
    pub name: String,
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Plaintext password; the policy is checked by the service.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Brand creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateBrandRequest {
    /// The brand to create.
    #[validate(nested)]
    pub brand: CreateBrandBody,
}

/// Brand fields for creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateBrandBody {
    /// Brand name.
    #[validate(length(min = 2))]
    pub name: String,
}

/// Brand update request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateBrandRequest {
    /// Fields to change.
    #[validate(nested)]
    pub brand: UpdateBrandBody,
}

/// Brand fields for a partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateBrandBody {
    /// New name.
    #[validate(length(min = 2))]
    pub name: Option<String>,
    /// New verification flag.
    pub verified: Option<bool>,
    /// Replacement member list.
    pub users: Option<Vec<IdRef>>,
}

/// Brand invitation request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct InviteUserRequest {
    /// Email of the person to add.
    #[validate(email)]
    pub email: String,
}

/// Product creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProductRequest {
    /// The product to create.
    #[validate(nested)]
    pub product: CreateProductBody,
}

/// Product fields for creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProductBody {
    /// Owning brand.
    pub brand: IdRef,
    /// Product name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// ISO 4217 currency code.
    #[validate(length(equal = 3))]
    pub currency: String,
    /// Price in minor units.
    #[validate(range(min = 0))]
    pub price: i64,
}

/// Product update request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProductRequest {
    /// Fields to change.
    #[validate(nested)]
    pub product: UpdateProductBody,
}

/// Product fields for a partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProductBody {
    /// New name.
    #[validate(length(min = 1))]
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New currency code.
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
    /// New price in minor units.
    #[validate(range(min = 0))]
    pub price: Option<i64>,
}

/// Product model creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateModelRequest {
    /// The model to create.
    #[validate(nested)]
    pub model: CreateModelBody,
}

/// Product model fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateModelBody {
    /// Model name.
    #[validate(length(min = 1))]
    pub name: String,
}

/// Image upload request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    /// Display name.
    pub name: Option<String>,
    /// `data:<mime>;base64,<payload>` URL.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub content: String,
    /// Product model the image illustrates.
    pub model_id: Option<Uuid>,
}

/// Image update request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateImageRequest {
    /// Fields to change.
    #[validate(nested)]
    pub image: UpdateImageBody,
}

/// Image fields for a partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateImageBody {
    /// New display name.
    #[validate(length(min = 1))]
    pub name: Option<String>,
    /// New priority.
    pub priority: Option<ImagePriority>,
}
