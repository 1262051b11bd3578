//! Pending brand invitation repository.

use sqlx::PgPool;
use uuid::Uuid;

use booster_core::error::{AppError, ErrorKind};
use booster_core::result::AppResult;
use booster_entity::brand::OnboardingUser;

/// Repository for `onboarding_users`.
#[derive(Debug, Clone)]
pub struct OnboardingRepository {
    pool: PgPool,
}

impl OnboardingRepository {
    /// Create a new onboarding repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record an invitation. Re-inviting the same email to the same brand
    /// returns the existing invitation.
    pub async fn create(&self, email: &str, brand_id: Uuid) -> AppResult<OnboardingUser> {
        sqlx::query_as::<_, OnboardingUser>(
            "INSERT INTO onboarding_users (email, brand_id) VALUES ($1, $2) \
             ON CONFLICT (LOWER(email), brand_id) DO UPDATE SET email = EXCLUDED.email \
             RETURNING *",
        )
        .bind(email)
        .bind(brand_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create invitation", e))
    }
}
