//! Integration tests for products and product models.
//!
//! These need `BOOSTER_TEST_DATABASE_URL`; they return early without it.

mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

use helpers::TestApp;

#[tokio::test]
async fn test_member_creates_product() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let member = app.create_user(false).await;
    let brand_id = app.create_brand(&admin, &[&member]).await;

    let product = app.create_product(&member, brand_id).await;

    assert_eq!(product["brandId"], brand_id.to_string());
    assert_eq!(product["currency"], "EUR");
    assert_eq!(product["price"], 12900);
    assert!(product["slug"].as_str().is_some_and(|s| s.starts_with("sneaker-")));
}

#[tokio::test]
async fn test_product_for_unknown_brand_is_not_found() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;

    let response = app
        .request(
            "POST",
            "/v1/products/product",
            Some(serde_json::json!({
                "product": {
                    "brand": { "id": Uuid::new_v4() },
                    "name": "Ghost",
                    "currency": "EUR",
                    "price": 100,
                }
            })),
            Some(&admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_outsider_cannot_create_product() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let outsider = app.create_user(false).await;
    let brand_id = app.create_brand(&admin, &[]).await;

    let response = app
        .request(
            "POST",
            "/v1/products/product",
            Some(serde_json::json!({
                "product": {
                    "brand": { "id": brand_id },
                    "name": "Intruder",
                    "currency": "EUR",
                    "price": 100,
                }
            })),
            Some(&outsider.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_negative_price_rejected() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let brand_id = app.create_brand(&admin, &[]).await;

    let response = app
        .request(
            "POST",
            "/v1/products/product",
            Some(serde_json::json!({
                "product": {
                    "brand": { "id": brand_id },
                    "name": "Refund",
                    "currency": "EUR",
                    "price": -1,
                }
            })),
            Some(&admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_property(), Some("price"));
}

#[tokio::test]
async fn test_product_details_and_listing() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let brand_id = app.create_brand(&admin, &[]).await;
    let product = app.create_product(&admin, brand_id).await;
    let product_id = product["id"].as_str().expect("product id");

    let response = app
        .request(
            "GET",
            &format!("/v1/products/product/{product_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["product"]["brand"]["id"], brand_id.to_string());
    assert!(response.body["product"]["models"].is_array());
    assert!(response.body["product"]["images"].is_array());

    let response = app
        .request(
            "GET",
            &format!("/v1/products/brand/{brand_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let products = response.body["products"].as_array().expect("products");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], product_id);
}

#[tokio::test]
async fn test_update_product_and_logs() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let brand_id = app.create_brand(&admin, &[]).await;
    let product = app.create_product(&admin, brand_id).await;
    let product_id = product["id"].as_str().expect("product id");

    let response = app
        .request(
            "PATCH",
            &format!("/v1/products/product/{product_id}"),
            Some(serde_json::json!({ "product": { "price": 9900, "currency": "usd" } })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["product"]["price"], 9900);
    assert_eq!(response.body["product"]["currency"], "USD");
    assert_eq!(response.body["product"]["name"], product["name"]);

    let response = app
        .request(
            "GET",
            &format!("/v1/products/productLogs/{product_id}"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let logs = response.body["logs"].as_array().expect("logs");
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1]["action"], "update");
    assert_eq!(logs[1]["fromState"]["price"], 12900);
    assert_eq!(logs[1]["toState"]["price"], 9900);
}

#[tokio::test]
async fn test_models_lifecycle() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let brand_id = app.create_brand(&admin, &[]).await;
    let product = app.create_product(&admin, brand_id).await;
    let product_id = product["id"].as_str().expect("product id");

    let response = app
        .request(
            "POST",
            &format!("/v1/products/product/{product_id}/models"),
            Some(serde_json::json!({ "model": { "name": "Blue / 42" } })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let model_id = response.body["model"]["id"]
        .as_str()
        .expect("model id")
        .to_string();

    let response = app
        .request(
            "GET",
            &format!("/v1/products/product/{product_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.body["product"]["models"][0]["id"], model_id.as_str());

    let response = app
        .request(
            "DELETE",
            &format!("/v1/products/model/{model_id}"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
}

#[tokio::test]
async fn test_delete_product() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_user(true).await;
    let brand_id = app.create_brand(&admin, &[]).await;
    let product = app.create_product(&admin, brand_id).await;
    let product_id = product["id"].as_str().expect("product id");

    let response = app
        .request(
            "DELETE",
            &format!("/v1/products/product/{product_id}"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/v1/products/product/{product_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
