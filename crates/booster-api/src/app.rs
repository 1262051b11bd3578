//! Application builder: wires repositories, services and the router.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use booster_auth::{PasswordHasher, PasswordValidator, TokenManager};
use booster_core::config::AppConfig;
use booster_core::traits::storage::ObjectStore;
use booster_database::repositories::{
    AccessTokenRepository, AuditLogRepository, BrandRepository, ImageRepository,
    OnboardingRepository, ProductModelRepository, ProductRepository, UserRepository,
};
use booster_service::{AuditService, BrandService, ImageService, ProductService, UserService};

use crate::middleware::instance::InstanceInfo;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared state from configuration, a pool and an object store.
pub fn build_state(
    config: AppConfig,
    db_pool: PgPool,
    object_store: Arc<dyn ObjectStore>,
) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let brand_repo = Arc::new(BrandRepository::new(db_pool.clone()));
    let onboarding_repo = Arc::new(OnboardingRepository::new(db_pool.clone()));
    let product_repo = Arc::new(ProductRepository::new(db_pool.clone()));
    let model_repo = Arc::new(ProductModelRepository::new(db_pool.clone()));
    let image_repo = Arc::new(ImageRepository::new(db_pool.clone()));
    let token_repo = Arc::new(AccessTokenRepository::new(db_pool.clone()));
    let audit_repo = Arc::new(AuditLogRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let token_manager = Arc::new(TokenManager::new(&config.auth, Arc::clone(&token_repo)));

    // ── Services ─────────────────────────────────────────────────
    let audit_service = Arc::new(AuditService::new(audit_repo));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&brand_repo),
        password_hasher,
        password_validator,
        token_manager,
        Arc::clone(&audit_service),
    ));
    let brand_service = Arc::new(BrandService::new(
        Arc::clone(&brand_repo),
        Arc::clone(&user_repo),
        Arc::clone(&onboarding_repo),
        Arc::clone(&image_repo),
        Arc::clone(&object_store),
        Arc::clone(&audit_service),
    ));
    let product_service = Arc::new(ProductService::new(
        Arc::clone(&product_repo),
        Arc::clone(&model_repo),
        Arc::clone(&brand_repo),
        Arc::clone(&image_repo),
        Arc::clone(&object_store),
        Arc::clone(&audit_service),
    ));
    let image_service = Arc::new(ImageService::new(
        image_repo,
        product_repo,
        model_repo,
        Arc::clone(&object_store),
        audit_service,
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        object_store,
        instance: Arc::new(InstanceInfo::from_env()),
        user_service,
        brand_service,
        product_service,
        image_service,
    }
}

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}
