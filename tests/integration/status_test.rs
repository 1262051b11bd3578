//! Router-level tests that run without a database.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};

use helpers::TestApp;

#[tokio::test]
async fn test_status_reports_alive() {
    let app = TestApp::router_only().await;

    let response = app.request("GET", "/v1/status", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "status": true }));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = TestApp::router_only().await;

    let response = app.request("GET", "/v1/openapi.json", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["info"]["title"], "Booster API");
    let paths = response.body["paths"].as_object().expect("paths object");
    assert!(paths.contains_key("/v1/users/login"));
    assert!(paths["/v1/brands/brand/{brandId}"]["patch"].is_object());
    assert_eq!(
        response.body["components"]["securitySchemes"]["bearerAuth"]["scheme"],
        "bearer"
    );
}

#[tokio::test]
async fn test_instance_headers_present() {
    let app = TestApp::router_only().await;

    let response = app.request("GET", "/v1/status", None, None).await;

    assert!(response.headers.contains_key("x-booster-instance"));
    assert!(response.headers.contains_key("x-booster-version"));
}

#[tokio::test]
async fn test_missing_token_rejected() {
    let app = TestApp::router_only().await;

    let response = app.request("GET", "/v1/users/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_type(), Some("accessToken"));
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::router_only().await;

    let response = app
        .request("GET", "/v1/brands/myBrands", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_type(), Some("accessToken"));
}

#[tokio::test]
async fn test_non_bearer_scheme_rejected() {
    let app = TestApp::router_only().await;

    let req = Request::builder()
        .method("GET")
        .uri("/v1/users/me")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_type(), Some("accessToken"));
}

#[tokio::test]
async fn test_registration_validates_email() {
    let app = TestApp::router_only().await;

    let response = app
        .request(
            "POST",
            "/v1/users",
            Some(serde_json::json!({
                "user": { "name": "Ada", "email": "not-an-email", "password": "whatever-long" }
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_type(), Some("validation"));
    assert_eq!(response.error_property(), Some("email"));
}

#[tokio::test]
async fn test_registration_reports_every_invalid_field() {
    let app = TestApp::router_only().await;

    let response = app
        .request(
            "POST",
            "/v1/users",
            Some(serde_json::json!({
                "user": { "name": "A", "email": "not-an-email", "password": "whatever-long" }
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.body["errors"].as_array().expect("errors array");
    let properties: Vec<_> = errors
        .iter()
        .map(|e| e["property"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(properties, vec!["email", "name"]);
    assert!(errors.iter().all(|e| e["type"] == "validation"));
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = TestApp::router_only().await;

    let req = Request::builder()
        .method("POST")
        .uri("/v1/users/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ \"email\": "))
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_type(), Some("validation"));
}

#[tokio::test]
async fn test_invalid_path_id_names_parameter() {
    let app = TestApp::router_only().await;

    let response = app
        .request("GET", "/v1/brands/brand/not-a-uuid", None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_type(), Some("validation"));
    assert_eq!(response.error_property(), Some("brandId"));
}

#[tokio::test]
async fn test_cors_allows_wildcard_origin() {
    let app = TestApp::router_only().await;

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/v1/users/login")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(
        response
            .headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let app = TestApp::router_only().await;

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/v1/users/login")
        .header(header::ORIGIN, "https://evil.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert!(
        response
            .headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_health_reports_dependencies() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };

    let response = app.request("GET", "/v1/status/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["database"], true);
    assert_eq!(response.body["storage"], true);
    assert_eq!(response.body["status"], true);
}
