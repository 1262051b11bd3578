//! Request context carrying the authenticated user and their memberships.

use uuid::Uuid;

use booster_auth::BrandAccess;
use booster_core::error::AppError;
use booster_entity::user::User;

/// Context for the current authenticated request.
///
/// Built once per request by the auth extractor and passed into service
/// methods so that every operation knows who is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user.
    pub user: User,
    /// ID of the bearer token used for this request.
    pub token_id: Uuid,
    /// Brands the user is a member of.
    pub brand_ids: Vec<Uuid>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user: User, token_id: Uuid, brand_ids: Vec<Uuid>) -> Self {
        Self {
            user,
            token_id,
            brand_ids,
        }
    }

    /// The authenticated user's ID.
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }

    /// Access view used by the brand checks.
    pub fn access(&self) -> BrandAccess<'_> {
        BrandAccess::new(self.user.is_admin, &self.brand_ids)
    }

    /// Fails unless the user is an admin.
    pub fn require_admin(&self) -> Result<(), AppError> {
        self.access().require_admin()
    }

    /// Fails unless the user is an admin or a member of `brand_id`.
    pub fn require_brand(&self, brand_id: Uuid) -> Result<(), AppError> {
        self.access().require_brand(brand_id)
    }
}
