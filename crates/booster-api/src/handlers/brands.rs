//! Brand handlers: listing, CRUD, membership and invitations.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use booster_service::brand::{InviteOutcome, UpdateBrandRequest};

use crate::dto::request::{CreateBrandRequest, InviteUserRequest, UpdateBrandRequest as UpdateBrandBody};
use crate::dto::response::{
    BrandLogsResponse, BrandResponse, BrandsResponse, CreatedBrandResponse, InviteResponse,
    MyBrandsResponse, SuccessResponse, UpdatedBrandResponse,
};
use crate::error::{ApiError, ApiErrorResponse};
use crate::extractors::{AuthUser, ValidJson, parse_uuid};
use crate::state::AppState;

/// GET /v1/brands/brands
#[utoipa::path(
    get,
    path = "/v1/brands/brands",
    tag = "brands",
    responses((status = 200, description = "Every brand with its members", body = BrandsResponse))
)]
pub async fn list_brands(State(state): State<AppState>) -> Result<Json<BrandsResponse>, ApiError> {
    let brands = state.brand_service.list().await?;
    Ok(Json(BrandsResponse { brands }))
}

/// GET /v1/brands/myBrands
#[utoipa::path(
    get,
    path = "/v1/brands/myBrands",
    tag = "brands",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Brands the caller belongs to", body = MyBrandsResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
    )
)]
pub async fn my_brands(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MyBrandsResponse>, ApiError> {
    let brands = state.brand_service.my_brands(&auth).await?;
    Ok(Json(MyBrandsResponse { brands }))
}

/// POST /v1/brands/brand
#[utoipa::path(
    post,
    path = "/v1/brands/brand",
    tag = "brands",
    security(("bearerAuth" = [])),
    request_body = CreateBrandRequest,
    responses(
        (status = 200, description = "Brand created", body = CreatedBrandResponse),
        (status = 400, description = "Invalid body", body = ApiErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ApiErrorResponse),
    )
)]
pub async fn create_brand(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<CreateBrandRequest>,
) -> Result<Json<CreatedBrandResponse>, ApiError> {
    let brand = state.brand_service.create(&auth, &req.brand.name).await?;
    Ok(Json(CreatedBrandResponse {
        success: true,
        brand,
    }))
}

/// GET /v1/brands/brand/{brandId}
#[utoipa::path(
    get,
    path = "/v1/brands/brand/{brandId}",
    tag = "brands",
    params(("brandId" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "The brand with its members", body = BrandResponse),
        (status = 404, description = "No such brand", body = ApiErrorResponse),
    )
)]
pub async fn get_brand(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
) -> Result<Json<BrandResponse>, ApiError> {
    let brand_id = parse_uuid(&brand_id, "brandId")?;
    let brand = state.brand_service.get_with_members(brand_id).await?;
    Ok(Json(BrandResponse { brand }))
}

/// GET /v1/brands/brandLogs/{brandId}
#[utoipa::path(
    get,
    path = "/v1/brands/brandLogs/{brandId}",
    tag = "brands",
    security(("bearerAuth" = [])),
    params(("brandId" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "The brand and its audit trail", body = BrandLogsResponse),
        (status = 403, description = "Caller is not a member", body = ApiErrorResponse),
        (status = 404, description = "No such brand", body = ApiErrorResponse),
    )
)]
pub async fn brand_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(brand_id): Path<String>,
) -> Result<Json<BrandLogsResponse>, ApiError> {
    let brand_id = parse_uuid(&brand_id, "brandId")?;
    let (brand, logs) = state.brand_service.get_with_logs(&auth, brand_id).await?;
    Ok(Json(BrandLogsResponse { brand, logs }))
}

/// PATCH /v1/brands/brand/{brandId}
#[utoipa::path(
    patch,
    path = "/v1/brands/brand/{brandId}",
    tag = "brands",
    security(("bearerAuth" = [])),
    params(("brandId" = Uuid, Path, description = "Brand ID")),
    request_body = UpdateBrandBody,
    responses(
        (status = 200, description = "The brand after the update", body = UpdatedBrandResponse),
        (status = 400, description = "Invalid body or unknown member", body = ApiErrorResponse),
        (status = 403, description = "Caller may not change this brand", body = ApiErrorResponse),
        (status = 404, description = "No such brand", body = ApiErrorResponse),
    )
)]
pub async fn update_brand(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(brand_id): Path<String>,
    ValidJson(req): ValidJson<UpdateBrandBody>,
) -> Result<Json<UpdatedBrandResponse>, ApiError> {
    let brand_id = parse_uuid(&brand_id, "brandId")?;
    let changes = UpdateBrandRequest {
        name: req.brand.name,
        verified: req.brand.verified,
        users: req
            .brand
            .users
            .map(|users| users.into_iter().map(|u| u.id).collect()),
    };

    let brand = state.brand_service.update(&auth, brand_id, changes).await?;
    Ok(Json(UpdatedBrandResponse {
        success: true,
        brand,
    }))
}

/// POST /v1/brands/brand/{brandId}/inviteUser
#[utoipa::path(
    post,
    path = "/v1/brands/brand/{brandId}/inviteUser",
    tag = "brands",
    security(("bearerAuth" = [])),
    params(("brandId" = Uuid, Path, description = "Brand ID")),
    request_body = InviteUserRequest,
    responses(
        (status = 200, description = "Member added or invitation pending", body = InviteResponse),
        (status = 403, description = "Caller is not a member", body = ApiErrorResponse),
        (status = 404, description = "No such brand", body = ApiErrorResponse),
    )
)]
pub async fn invite_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(brand_id): Path<String>,
    ValidJson(req): ValidJson<InviteUserRequest>,
) -> Result<Json<InviteResponse>, ApiError> {
    let brand_id = parse_uuid(&brand_id, "brandId")?;

    let body = match state.brand_service.invite(&auth, brand_id, &req.email).await? {
        InviteOutcome::Added { brand, .. } => InviteResponse {
            message: "user added".to_string(),
            info: "The user now has access to your brand".to_string(),
            brand,
            onboarding_id: None,
        },
        InviteOutcome::Invited { brand, onboarding } => InviteResponse {
            message: "onboarding sent".to_string(),
            info: "The invitation is pending until the user registers with this email".to_string(),
            brand,
            onboarding_id: Some(onboarding.id),
        },
    };

    Ok(Json(body))
}

/// DELETE /v1/brands/brand/{brandId}
#[utoipa::path(
    delete,
    path = "/v1/brands/brand/{brandId}",
    tag = "brands",
    security(("bearerAuth" = [])),
    params(("brandId" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Brand and its catalog deleted", body = SuccessResponse),
        (status = 403, description = "Caller is not a member", body = ApiErrorResponse),
        (status = 404, description = "No such brand", body = ApiErrorResponse),
    )
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(brand_id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let brand_id = parse_uuid(&brand_id, "brandId")?;
    state.brand_service.delete(&auth, brand_id).await?;
    Ok(Json(SuccessResponse::ok()))
}
