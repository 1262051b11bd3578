//! Integration tests for access token expiry and the expired-token reaper.
//!
//! These need `BOOSTER_TEST_DATABASE_URL`; they return early without it.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use uuid::Uuid;

use booster_auth::TokenCleanup;
use booster_database::repositories::AccessTokenRepository;

use helpers::TestApp;

async fn expire_tokens_of(app: &TestApp, user_id: Uuid) {
    sqlx::query(
        "UPDATE access_tokens SET expires_at = NOW() - INTERVAL '1 hour' WHERE user_id = $1",
    )
    .bind(user_id)
    .execute(&app.db_pool)
    .await
    .expect("Failed to expire tokens");
}

async fn token_count(app: &TestApp, user_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM access_tokens WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count tokens")
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_user(false).await;

    let response = app
        .request("GET", "/v1/users/me", None, Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    expire_tokens_of(&app, user.id).await;

    let response = app
        .request("GET", "/v1/users/me", None, Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_type(), Some("accessToken"));
}

#[tokio::test]
async fn test_cleanup_removes_only_expired_tokens() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let expired = app.create_user(false).await;
    let live = app.create_user(false).await;
    expire_tokens_of(&app, expired.id).await;

    let cleanup = TokenCleanup::new(
        Arc::new(AccessTokenRepository::new(app.db_pool.clone())),
        1,
    );
    let removed = cleanup.run_cleanup().await.expect("cleanup failed");

    assert!(removed >= 1);
    assert_eq!(token_count(&app, expired.id).await, 0);
    assert_eq!(token_count(&app, live.id).await, 1);

    let response = app
        .request("GET", "/v1/users/me", None, Some(&live.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
