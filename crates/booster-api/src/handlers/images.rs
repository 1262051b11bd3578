//! Product image handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use uuid::Uuid;

use booster_core::error::AppError;
use booster_service::image::{ImageChanges, NewImage};

use crate::dto::request::{UpdateImageRequest, UploadImageRequest};
use crate::dto::response::{ImageResponse, SuccessResponse};
use crate::error::{ApiError, ApiErrorResponse};
use crate::extractors::{AuthUser, ValidJson, parse_uuid};
use crate::state::AppState;

/// GET /v1/images/image/{imageId}
#[utoipa::path(
    get,
    path = "/v1/images/image/{imageId}",
    tag = "images",
    params(("imageId" = Uuid, Path, description = "Image ID")),
    responses(
        (status = 200, description = "The image blob with its stored MIME type"),
        (status = 404, description = "No such image", body = ApiErrorResponse),
    )
)]
pub async fn download_image(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> Result<Response, ApiError> {
    let image_id = parse_uuid(&image_id, "imageId")?;
    let download = state.image_service.download(image_id).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, download.image.mime_type)
        .header(header::CONTENT_LENGTH, download.size_bytes)
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from_stream(download.stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// POST /v1/images/product/{productId}
#[utoipa::path(
    post,
    path = "/v1/images/product/{productId}",
    tag = "images",
    security(("bearerAuth" = [])),
    params(("productId" = Uuid, Path, description = "Product ID")),
    request_body = UploadImageRequest,
    responses(
        (status = 200, description = "Image stored", body = ImageResponse),
        (status = 400, description = "Invalid data URL or model", body = ApiErrorResponse),
        (status = 403, description = "Caller is not a brand member", body = ApiErrorResponse),
        (status = 404, description = "No such product", body = ApiErrorResponse),
    )
)]
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<String>,
    ValidJson(req): ValidJson<UploadImageRequest>,
) -> Result<Json<ImageResponse>, ApiError> {
    let product_id = parse_uuid(&product_id, "productId")?;
    let image = state
        .image_service
        .upload(
            &auth,
            product_id,
            NewImage {
                name: req.name,
                content: req.content,
                model_id: req.model_id,
            },
        )
        .await?;

    Ok(Json(ImageResponse { image }))
}

/// PATCH /v1/images/image/{imageId}
#[utoipa::path(
    patch,
    path = "/v1/images/image/{imageId}",
    tag = "images",
    security(("bearerAuth" = [])),
    params(("imageId" = Uuid, Path, description = "Image ID")),
    request_body = UpdateImageRequest,
    responses(
        (status = 200, description = "The image after the update", body = ImageResponse),
        (status = 400, description = "Invalid body", body = ApiErrorResponse),
        (status = 403, description = "Caller is not a brand member", body = ApiErrorResponse),
        (status = 404, description = "No such image", body = ApiErrorResponse),
        (status = 409, description = "Concurrent promotion to primary", body = ApiErrorResponse),
    )
)]
pub async fn update_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(image_id): Path<String>,
    ValidJson(req): ValidJson<UpdateImageRequest>,
) -> Result<Json<ImageResponse>, ApiError> {
    let image_id = parse_uuid(&image_id, "imageId")?;
    let image = state
        .image_service
        .update(
            &auth,
            image_id,
            ImageChanges {
                name: req.image.name,
                priority: req.image.priority,
            },
        )
        .await?;

    Ok(Json(ImageResponse { image }))
}

/// DELETE /v1/images/image/{imageId}
#[utoipa::path(
    delete,
    path = "/v1/images/image/{imageId}",
    tag = "images",
    security(("bearerAuth" = [])),
    params(("imageId" = Uuid, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Image deleted", body = SuccessResponse),
        (status = 403, description = "Caller is not a brand member", body = ApiErrorResponse),
        (status = 404, description = "No such image", body = ApiErrorResponse),
    )
)]
pub async fn delete_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(image_id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let image_id = parse_uuid(&image_id, "imageId")?;
    state.image_service.delete(&auth, image_id).await?;
    Ok(Json(SuccessResponse::ok()))
}
