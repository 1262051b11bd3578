//! Integration tests for brands, membership and invitations.
//!
//! These need `BOOSTER_TEST_DATABASE_URL`; they return early without it.

mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

use helpers::{TestApp, unique_name};

#[tokio::test]
async fn test_only_admin_creates_brands() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_user(false).await;

    let response = app
        .request(
            "POST",
            "/v1/brands/brand",
            Some(serde_json::json!({ "brand": { "name": unique_name("Brand") } })),
            Some(&user.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_type(), Some("acl"));
}

#[tokio::test]
async fn test_create_brand_derives_slug() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;

    let response = app
        .request(
            "POST",
            "/v1/brands/brand",
            Some(serde_json::json!({ "brand": { "name": "Café  Du Nord" } })),
            Some(&admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["brand"]["name"], "Café  Du Nord");
    assert_eq!(response.body["brand"]["slug"], "cafe-du-nord");
    assert_eq!(response.body["brand"]["verified"], false);
}

#[tokio::test]
async fn test_get_missing_brand_is_not_found() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };

    let response = app
        .request(
            "GET",
            &format!("/v1/brands/brand/{}", Uuid::new_v4()),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_type(), Some("notFound"));
}

#[tokio::test]
async fn test_member_updates_brand_but_not_verification() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let member = app.create_user(false).await;
    let brand_id = app.create_brand(&admin, &[&member]).await;
    let new_name = unique_name("Renamed");

    let response = app
        .request(
            "PATCH",
            &format!("/v1/brands/brand/{brand_id}"),
            Some(serde_json::json!({ "brand": { "name": new_name } })),
            Some(&member.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["brand"]["name"], new_name.as_str());

    let response = app
        .request(
            "PATCH",
            &format!("/v1/brands/brand/{brand_id}"),
            Some(serde_json::json!({ "brand": { "verified": true } })),
            Some(&member.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PATCH",
            &format!("/v1/brands/brand/{brand_id}"),
            Some(serde_json::json!({ "brand": { "verified": true } })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["brand"]["verified"], true);
}

#[tokio::test]
async fn test_outsider_cannot_touch_brand() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let outsider = app.create_user(false).await;
    let brand_id = app.create_brand(&admin, &[]).await;

    let response = app
        .request(
            "GET",
            &format!("/v1/brands/brandLogs/{brand_id}"),
            None,
            Some(&outsider.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/v1/brands/brand/{brand_id}"),
            None,
            Some(&outsider.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invite_existing_user_adds_member() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let invitee = app.create_user(false).await;
    let brand_id = app.create_brand(&admin, &[]).await;

    let response = app
        .request(
            "POST",
            &format!("/v1/brands/brand/{brand_id}/inviteUser"),
            Some(serde_json::json!({ "email": invitee.email })),
            Some(&admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["message"], "user added");
    let users = response.body["brand"]["users"]
        .as_array()
        .expect("users array");
    assert!(users.iter().any(|u| u["id"] == invitee.id.to_string()));

    let response = app
        .request("GET", "/v1/brands/myBrands", None, Some(&invitee.token))
        .await;
    let brands = response.body["brands"].as_array().expect("brands array");
    assert!(brands.iter().any(|b| b["id"] == brand_id.to_string()));
}

#[tokio::test]
async fn test_brand_logs_follow_changes() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let member = app.create_user(false).await;
    let brand_id = app.create_brand(&admin, &[&member]).await;

    let response = app
        .request(
            "GET",
            &format!("/v1/brands/brandLogs/{brand_id}"),
            None,
            Some(&member.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let logs = response.body["logs"].as_array().expect("logs array");
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["action"], "create");
    assert_eq!(logs[1]["action"], "update");
    assert_eq!(logs[1]["userId"], admin.id.to_string());
    assert!(logs[1]["fromState"].is_object());
    assert!(logs[1]["toState"].is_object());
}

#[tokio::test]
async fn test_delete_brand() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let brand_id = app.create_brand(&admin, &[]).await;

    let response = app
        .request(
            "DELETE",
            &format!("/v1/brands/brand/{brand_id}"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let response = app
        .request("GET", &format!("/v1/brands/brand/{brand_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
