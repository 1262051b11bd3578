//! Integration tests for product image upload, download and maintenance.
//!
//! These need `BOOSTER_TEST_DATABASE_URL`; they return early without it.

mod helpers;

use axum::http::{StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use helpers::{TestApp, TestUser};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot really a png but close enough";

fn png_data_url() -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(PNG_BYTES))
}

async fn upload(app: &TestApp, user: &TestUser, product_id: &str, body: Value) -> Value {
    let response = app
        .request(
            "POST",
            &format!("/v1/images/product/{product_id}"),
            Some(body),
            Some(&user.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.body["image"].clone()
}

async fn setup(app: &TestApp) -> (TestUser, String) {
    let admin = app.create_user(true).await;
    let brand_id = app.create_brand(&admin, &[]).await;
    let product = app.create_product(&admin, brand_id).await;
    let product_id = product["id"].as_str().expect("product id").to_string();
    (admin, product_id)
}

#[tokio::test]
async fn test_upload_and_download() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (admin, product_id) = setup(&app).await;

    let image = upload(
        &app,
        &admin,
        &product_id,
        serde_json::json!({ "name": "front.png", "content": png_data_url() }),
    )
    .await;

    assert_eq!(image["name"], "front.png");
    assert_eq!(image["mimeType"], "image/png");
    assert_eq!(image["priority"], "secondary");
    assert_eq!(image["sizeBytes"], PNG_BYTES.len());
    let image_id = image["id"].as_str().expect("image id");
    assert_eq!(
        image["storageKey"],
        format!("products/{product_id}/{image_id}.png")
    );

    let response = app
        .request("GET", &format!("/v1/images/image/{image_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    assert_eq!(
        response
            .headers
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok()),
        Some(PNG_BYTES.len().to_string().as_str())
    );
    assert_eq!(response.bytes, PNG_BYTES);
}

#[tokio::test]
async fn test_default_name_uses_stored_file_name() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (admin, product_id) = setup(&app).await;

    let image = upload(
        &app,
        &admin,
        &product_id,
        serde_json::json!({ "content": png_data_url() }),
    )
    .await;

    let image_id = image["id"].as_str().expect("image id");
    assert_eq!(image["name"], format!("{image_id}.png"));
}

#[tokio::test]
async fn test_bad_content_rejected() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (admin, product_id) = setup(&app).await;

    for content in [
        Value::Null,
        Value::from("not a data url"),
        Value::from(format!("data:text/plain;base64,{}", STANDARD.encode("hello"))),
        Value::from("data:image/png;base64,@@@"),
    ] {
        let mut body = serde_json::json!({ "name": "x.png" });
        if !content.is_null() {
            body["content"] = content;
        }

        let response = app
            .request(
                "POST",
                &format!("/v1/images/product/{product_id}"),
                Some(body),
                Some(&admin.token),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
        assert_eq!(response.error_property(), Some("content"));
    }
}

#[tokio::test]
async fn test_model_must_belong_to_product() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (admin, product_id) = setup(&app).await;

    let response = app
        .request(
            "POST",
            &format!("/v1/images/product/{product_id}"),
            Some(serde_json::json!({
                "content": png_data_url(),
                "modelId": uuid::Uuid::new_v4(),
            })),
            Some(&admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_property(), Some("modelId"));
}

#[tokio::test]
async fn test_promoting_primary_demotes_previous() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (admin, product_id) = setup(&app).await;
    let body = serde_json::json!({ "content": png_data_url() });
    let first = upload(&app, &admin, &product_id, body.clone()).await;
    let second = upload(&app, &admin, &product_id, body).await;
    let first_id = first["id"].as_str().expect("first id");
    let second_id = second["id"].as_str().expect("second id");

    for image_id in [first_id, second_id] {
        let response = app
            .request(
                "PATCH",
                &format!("/v1/images/image/{image_id}"),
                Some(serde_json::json!({ "image": { "priority": "primary" } })),
                Some(&admin.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        assert_eq!(response.body["image"]["priority"], "primary");
    }

    let response = app
        .request(
            "GET",
            &format!("/v1/products/product/{product_id}"),
            None,
            None,
        )
        .await;
    let images = response.body["product"]["images"]
        .as_array()
        .expect("images");
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["id"], second_id);
    assert_eq!(images[0]["priority"], "primary");
    assert_eq!(images[1]["id"], first_id);
    assert_eq!(images[1]["priority"], "secondary");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_promotions_leave_one_primary() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (admin, product_id) = setup(&app).await;
    let body = serde_json::json!({ "content": png_data_url() });

    let mut paths = Vec::new();
    for _ in 0..4 {
        let image = upload(&app, &admin, &product_id, body.clone()).await;
        let image_id = image["id"].as_str().expect("image id");
        paths.push(format!("/v1/images/image/{image_id}"));
    }

    for _ in 0..5 {
        let promotions = paths.iter().map(|path| {
            app.request(
                "PATCH",
                path,
                Some(serde_json::json!({ "image": { "priority": "primary" } })),
                Some(&admin.token),
            )
        });
        for response in futures::future::join_all(promotions).await {
            assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        }

        let response = app
            .request(
                "GET",
                &format!("/v1/products/product/{product_id}"),
                None,
                None,
            )
            .await;
        let images = response.body["product"]["images"]
            .as_array()
            .expect("images");
        let primaries = images
            .iter()
            .filter(|image| image["priority"] == "primary")
            .count();
        assert_eq!(primaries, 1);
    }
}

#[tokio::test]
async fn test_rename_image() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (admin, product_id) = setup(&app).await;
    let image = upload(
        &app,
        &admin,
        &product_id,
        serde_json::json!({ "content": png_data_url() }),
    )
    .await;
    let image_id = image["id"].as_str().expect("image id");

    let response = app
        .request(
            "PATCH",
            &format!("/v1/images/image/{image_id}"),
            Some(serde_json::json!({ "image": { "name": "packshot.png" } })),
            Some(&admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["image"]["name"], "packshot.png");
    assert_eq!(response.body["image"]["priority"], "secondary");
}

#[tokio::test]
async fn test_delete_removes_blob() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (admin, product_id) = setup(&app).await;
    let image = upload(
        &app,
        &admin,
        &product_id,
        serde_json::json!({ "content": png_data_url() }),
    )
    .await;
    let image_id = image["id"].as_str().expect("image id");
    let blob = app
        .storage_dir
        .path()
        .join(image["storageKey"].as_str().expect("storage key"));
    assert!(blob.exists());

    let response = app
        .request(
            "DELETE",
            &format!("/v1/images/image/{image_id}"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!blob.exists());

    let response = app
        .request("GET", &format!("/v1/images/image/{image_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_outsider_cannot_upload() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (_admin, product_id) = setup(&app).await;
    let outsider = app.create_user(false).await;

    let response = app
        .request(
            "POST",
            &format!("/v1/images/product/{product_id}"),
            Some(serde_json::json!({ "content": png_data_url() })),
            Some(&outsider.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
