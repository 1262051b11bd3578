//! Product and product model handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use booster_service::product::{NewProduct, ProductChanges};

use crate::dto::request::{CreateModelRequest, CreateProductRequest, UpdateProductRequest};
use crate::dto::response::{
    ModelResponse, ProductDetailsResponse, ProductLogsResponse, ProductsResponse,
    SavedProductResponse, SuccessResponse,
};
use crate::error::{ApiError, ApiErrorResponse};
use crate::extractors::{AuthUser, ValidJson, parse_uuid};
use crate::state::AppState;

/// GET /v1/products/product/{productId}
#[utoipa::path(
    get,
    path = "/v1/products/product/{productId}",
    tag = "products",
    params(("productId" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product with its brand, models and images", body = ProductDetailsResponse),
        (status = 404, description = "No such product", body = ApiErrorResponse),
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductDetailsResponse>, ApiError> {
    let product_id = parse_uuid(&product_id, "productId")?;
    let product = state.product_service.details(product_id).await?;
    Ok(Json(ProductDetailsResponse { product }))
}

/// GET /v1/products/productLogs/{productId}
#[utoipa::path(
    get,
    path = "/v1/products/productLogs/{productId}",
    tag = "products",
    security(("bearerAuth" = [])),
    params(("productId" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product and its audit trail", body = ProductLogsResponse),
        (status = 403, description = "Caller is not a brand member", body = ApiErrorResponse),
        (status = 404, description = "No such product", body = ApiErrorResponse),
    )
)]
pub async fn product_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<String>,
) -> Result<Json<ProductLogsResponse>, ApiError> {
    let product_id = parse_uuid(&product_id, "productId")?;
    let (product, logs) = state
        .product_service
        .get_with_logs(&auth, product_id)
        .await?;
    Ok(Json(ProductLogsResponse { product, logs }))
}

/// GET /v1/products/brand/{brandId}
#[utoipa::path(
    get,
    path = "/v1/products/brand/{brandId}",
    tag = "products",
    params(("brandId" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Products of the brand", body = ProductsResponse),
        (status = 404, description = "No such brand", body = ApiErrorResponse),
    )
)]
pub async fn list_brand_products(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let brand_id = parse_uuid(&brand_id, "brandId")?;
    let products = state.product_service.list_by_brand(brand_id).await?;
    Ok(Json(ProductsResponse { products }))
}

/// POST /v1/products/product
#[utoipa::path(
    post,
    path = "/v1/products/product",
    tag = "products",
    security(("bearerAuth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = SavedProductResponse),
        (status = 400, description = "Invalid body", body = ApiErrorResponse),
        (status = 403, description = "Caller is not a brand member", body = ApiErrorResponse),
        (status = 404, description = "No such brand", body = ApiErrorResponse),
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<CreateProductRequest>,
) -> Result<Json<SavedProductResponse>, ApiError> {
    let body = req.product;
    let product = state
        .product_service
        .create(
            &auth,
            NewProduct {
                brand_id: body.brand.id,
                name: body.name,
                description: body.description,
                currency: body.currency,
                price: body.price,
            },
        )
        .await?;

    Ok(Json(SavedProductResponse {
        success: true,
        product,
    }))
}

/// PATCH /v1/products/product/{productId}
#[utoipa::path(
    patch,
    path = "/v1/products/product/{productId}",
    tag = "products",
    security(("bearerAuth" = [])),
    params(("productId" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "The product after the update", body = SavedProductResponse),
        (status = 400, description = "Invalid body", body = ApiErrorResponse),
        (status = 403, description = "Caller is not a brand member", body = ApiErrorResponse),
        (status = 404, description = "No such product", body = ApiErrorResponse),
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<String>,
    ValidJson(req): ValidJson<UpdateProductRequest>,
) -> Result<Json<SavedProductResponse>, ApiError> {
    let product_id = parse_uuid(&product_id, "productId")?;
    let body = req.product;
    let product = state
        .product_service
        .update(
            &auth,
            product_id,
            ProductChanges {
                name: body.name,
                description: body.description,
                currency: body.currency,
                price: body.price,
            },
        )
        .await?;

    Ok(Json(SavedProductResponse {
        success: true,
        product,
    }))
}

/// DELETE /v1/products/product/{productId}
#[utoipa::path(
    delete,
    path = "/v1/products/product/{productId}",
    tag = "products",
    security(("bearerAuth" = [])),
    params(("productId" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product, models and images deleted", body = SuccessResponse),
        (status = 403, description = "Caller is not a brand member", body = ApiErrorResponse),
        (status = 404, description = "No such product", body = ApiErrorResponse),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let product_id = parse_uuid(&product_id, "productId")?;
    state.product_service.delete(&auth, product_id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /v1/products/product/{productId}/models
#[utoipa::path(
    post,
    path = "/v1/products/product/{productId}/models",
    tag = "products",
    security(("bearerAuth" = [])),
    params(("productId" = Uuid, Path, description = "Product ID")),
    request_body = CreateModelRequest,
    responses(
        (status = 200, description = "Model created", body = ModelResponse),
        (status = 400, description = "Invalid body", body = ApiErrorResponse),
        (status = 403, description = "Caller is not a brand member", body = ApiErrorResponse),
        (status = 404, description = "No such product", body = ApiErrorResponse),
    )
)]
pub async fn create_model(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<String>,
    ValidJson(req): ValidJson<CreateModelRequest>,
) -> Result<Json<ModelResponse>, ApiError> {
    let product_id = parse_uuid(&product_id, "productId")?;
    let model = state
        .product_service
        .add_model(&auth, product_id, &req.model.name)
        .await?;
    Ok(Json(ModelResponse {
        success: true,
        model,
    }))
}

/// DELETE /v1/products/model/{modelId}
#[utoipa::path(
    delete,
    path = "/v1/products/model/{modelId}",
    tag = "products",
    security(("bearerAuth" = [])),
    params(("modelId" = Uuid, Path, description = "Model ID")),
    responses(
        (status = 200, description = "Model deleted", body = SuccessResponse),
        (status = 403, description = "Caller is not a brand member", body = ApiErrorResponse),
        (status = 404, description = "No such model", body = ApiErrorResponse),
    )
)]
pub async fn delete_model(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(model_id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let model_id = parse_uuid(&model_id, "modelId")?;
    state.product_service.delete_model(&auth, model_id).await?;
    Ok(Json(SuccessResponse::ok()))
}
