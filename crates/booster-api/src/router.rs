//! Route definitions for the Booster HTTP API.
//!
//! All routes are organized by resource and mounted under `/v1`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::openapi;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;
    let max_body = server.max_body_bytes;
    let timeout = Duration::from_secs(server.request_timeout_seconds);
    let cors = middleware::cors::build_cors_layer(&server.cors);

    let api_routes = Router::new()
        .merge(status_routes())
        .merge(user_routes())
        .merge(brand_routes())
        .merge(product_routes())
        .merge(image_routes());

    Router::new()
        .nest("/v1", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TimeoutLayer::new(timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn_with_state(
            state.instance.clone(),
            middleware::instance::instance_headers,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Liveness, dependency health and the API description (no auth required)
fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::status::status))
        .route("/status/health", get(handlers::status::health))
        .route("/openapi.json", get(openapi::openapi_json))
}

/// Registration, login and account lookups
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::users::register))
        .route("/users/login", post(handlers::users::login))
        .route("/users/logout", post(handlers::users::logout))
        .route("/users/me", get(handlers::users::me))
        .route("/users/users", get(handlers::users::list_users))
        .route("/users/user/{userId}", get(handlers::users::get_user))
}

/// Brand CRUD, membership and invitations
fn brand_routes() -> Router<AppState> {
    Router::new()
        .route("/brands/brands", get(handlers::brands::list_brands))
        .route("/brands/myBrands", get(handlers::brands::my_brands))
        .route("/brands/brand", post(handlers::brands::create_brand))
        .route(
            "/brands/brand/{brandId}",
            get(handlers::brands::get_brand)
                .patch(handlers::brands::update_brand)
                .delete(handlers::brands::delete_brand),
        )
        .route(
            "/brands/brandLogs/{brandId}",
            get(handlers::brands::brand_logs),
        )
        .route(
            "/brands/brand/{brandId}/inviteUser",
            post(handlers::brands::invite_user),
        )
}

/// Product CRUD and product models
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products/product", post(handlers::products::create_product))
        .route(
            "/products/product/{productId}",
            get(handlers::products::get_product)
                .patch(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        .route(
            "/products/productLogs/{productId}",
            get(handlers::products::product_logs),
        )
        .route(
            "/products/brand/{brandId}",
            get(handlers::products::list_brand_products),
        )
        .route(
            "/products/product/{productId}/models",
            post(handlers::products::create_model),
        )
        .route(
            "/products/model/{modelId}",
            delete(handlers::products::delete_model),
        )
}

/// Image upload, download and maintenance
fn image_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/images/image/{imageId}",
            get(handlers::images::download_image)
                .patch(handlers::images::update_image)
                .delete(handlers::images::delete_image),
        )
        .route(
            "/images/product/{productId}",
            post(handlers::images::upload_image),
        )
}
