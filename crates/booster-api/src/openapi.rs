//! OpenAPI document for the `/v1` surface.

use axum::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers;

/// Name protected routes use to reference the bearer scheme.
const BEARER_SCHEME: &str = "bearerAuth";

/// Generated description of every route, its bodies and error envelope.
#[derive(OpenApi)]
#[openapi(
    info(title = "Booster API", description = "Brand and product catalog"),
    paths(
        handlers::status::status,
        handlers::status::health,
        handlers::users::register,
        handlers::users::login,
        handlers::users::logout,
        handlers::users::me,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::brands::list_brands,
        handlers::brands::my_brands,
        handlers::brands::create_brand,
        handlers::brands::get_brand,
        handlers::brands::brand_logs,
        handlers::brands::update_brand,
        handlers::brands::invite_user,
        handlers::brands::delete_brand,
        handlers::products::get_product,
        handlers::products::product_logs,
        handlers::products::list_brand_products,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::products::create_model,
        handlers::products::delete_model,
        handlers::images::download_image,
        handlers::images::upload_image,
        handlers::images::update_image,
        handlers::images::delete_image,
    ),
    modifiers(&BearerScheme),
    tags(
        (name = "status", description = "Liveness and dependency health"),
        (name = "users", description = "Accounts and sessions"),
        (name = "brands", description = "Brands, membership and invitations"),
        (name = "products", description = "Products and product models"),
        (name = "images", description = "Product images"),
    )
)]
pub struct ApiDoc;

/// Registers the JWT bearer scheme referenced by protected routes.
struct BearerScheme;

impl Modify for BearerScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// GET /v1/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/v1/status",
            "/v1/users",
            "/v1/users/login",
            "/v1/users/user/{userId}",
            "/v1/brands/brand/{brandId}/inviteUser",
            "/v1/products/product/{productId}/models",
            "/v1/images/image/{imageId}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        assert_eq!(doc.paths.paths.len(), 22);
    }

    #[test]
    fn test_schemas_and_security_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        for schema in ["ApiErrorResponse", "RegisterRequest", "Brand", "ImagePriority", "LogEntry"] {
            assert!(components.schemas.contains_key(schema), "missing {schema}");
        }
        assert!(components.security_schemes.contains_key(BEARER_SCHEME));
    }
}
