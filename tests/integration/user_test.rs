//! Integration tests for registration, login and account lookups.
//!
//! These need `BOOSTER_TEST_DATABASE_URL`; they return early without it.

mod helpers;

use axum::http::StatusCode;

use helpers::{PASSWORD, TestApp, unique_email};

#[tokio::test]
async fn test_register_and_login() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let email = unique_email();

    let response = app
        .request(
            "POST",
            "/v1/users",
            Some(serde_json::json!({
                "user": { "name": "Ada Lovelace", "email": email, "password": PASSWORD }
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["user"]["email"], email.as_str());
    assert_eq!(response.body["user"]["isAdmin"], false);
    assert!(response.body["user"].get("passwordHash").is_none());

    let response = app
        .request(
            "POST",
            "/v1/users/login",
            Some(serde_json::json!({ "email": email, "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.body["token"].as_str().is_some());
    assert!(response.body["expiresAt"].as_str().is_some());
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_user(false).await;

    let response = app
        .request(
            "POST",
            "/v1/users",
            Some(serde_json::json!({
                "user": { "name": "Someone Else", "email": user.email, "password": PASSWORD }
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_type(), Some("conflict"));
}

#[tokio::test]
async fn test_short_password_rejected() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/v1/users",
            Some(serde_json::json!({
                "user": { "name": "Ada", "email": unique_email(), "password": "short" }
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_property(), Some("password"));
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_look_alike() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_user(false).await;

    let wrong_password = app
        .request(
            "POST",
            "/v1/users/login",
            Some(serde_json::json!({ "email": user.email, "password": "not-the-password" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/v1/users/login",
            Some(serde_json::json!({ "email": unique_email(), "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.error_type(), Some("login"));
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_me_and_logout() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_user(false).await;

    let response = app
        .request("GET", "/v1/users/me", None, Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], user.id.to_string());
    assert!(response.body["user"]["brands"].is_array());

    let response = app
        .request("POST", "/v1/users/logout", None, Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let response = app
        .request("GET", "/v1/users/me", None, Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_type(), Some("accessToken"));
}

#[tokio::test]
async fn test_user_listing_requires_admin() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_user(false).await;
    let admin = app.create_user(true).await;

    let response = app
        .request("GET", "/v1/users/users", None, Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_type(), Some("acl"));

    let response = app
        .request("GET", "/v1/users/users", None, Some(&admin.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let users = response.body["users"].as_array().expect("users array");
    assert!(users.iter().any(|u| u["id"] == user.id.to_string()));
}

#[tokio::test]
async fn test_admin_reads_user_with_logs() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_user(false).await;
    let admin = app.create_user(true).await;

    let response = app
        .request(
            "GET",
            &format!("/v1/users/user/{}", user.id),
            None,
            Some(&admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["user"]["email"], user.email.as_str());
    let logs = response.body["logs"].as_array().expect("logs array");
    assert_eq!(logs[0]["action"], "create");
    assert_eq!(logs[0]["refType"], "user");
}

#[tokio::test]
async fn test_invitation_redeemed_on_registration() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let brand_id = app.create_brand(&admin, &[]).await;
    let email = unique_email();

    let response = app
        .request(
            "POST",
            &format!("/v1/brands/brand/{brand_id}/inviteUser"),
            Some(serde_json::json!({ "email": email })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["message"], "onboarding sent");
    assert!(response.body["onboardingId"].as_str().is_some());

    app.request(
        "POST",
        "/v1/users",
        Some(serde_json::json!({
            "user": { "name": "Invited Person", "email": email, "password": PASSWORD }
        })),
        None,
    )
    .await;
    let token = app.login(&email, PASSWORD).await;

    let response = app
        .request("GET", "/v1/brands/myBrands", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let brands = response.body["brands"].as_array().expect("brands array");
    assert!(brands.iter().any(|b| b["id"] == brand_id.to_string()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_registration_survives_brand_deleted_meanwhile() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let brand_id = app.create_brand(&admin, &[]).await;
    let email = unique_email();

    let response = app
        .request(
            "POST",
            &format!("/v1/brands/brand/{brand_id}/inviteUser"),
            Some(serde_json::json!({ "email": email })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.body["message"], "onboarding sent");

    // Hold the brand deletion open so registration runs against it.
    let mut tx = app.db_pool.begin().await.expect("begin");
    sqlx::query("DELETE FROM brands WHERE id = $1")
        .bind(brand_id)
        .execute(&mut *tx)
        .await
        .expect("delete brand");

    let body = serde_json::json!({
        "user": { "name": "Late Invitee", "email": email, "password": PASSWORD }
    });
    let (response, committed) = tokio::join!(
        app.request("POST", "/v1/users", Some(body), None),
        async {
            tokio::time::sleep(std::time::Duration::from_millis(300)).await;
            tx.commit().await
        }
    );
    committed.expect("commit brand deletion");
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let token = app.login(&email, PASSWORD).await;
    let response = app
        .request("GET", "/v1/brands/myBrands", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["brands"].as_array().map(Vec::len), Some(0));

    let pending: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM onboarding_users WHERE LOWER(email) = LOWER($1)")
            .bind(&email)
            .fetch_one(&app.db_pool)
            .await
            .expect("count invitations");
    assert_eq!(pending, 0);
}
