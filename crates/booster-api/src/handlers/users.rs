//! Account handlers: registration, login, logout and admin lookups.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use booster_service::user::RegisterUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{
    LoginResponse, RegisterResponse, SuccessResponse, UserLogsResponse, UserResponse,
    UsersResponse,
};
use crate::error::{ApiError, ApiErrorResponse};
use crate::extractors::{AuthUser, ValidJson, parse_uuid};
use crate::state::AppState;

/// POST /v1/users
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Invalid body or weak password", body = ApiErrorResponse),
        (status = 409, description = "Email already registered", body = ApiErrorResponse),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let user = state
        .user_service
        .register(RegisterUser {
            name: req.user.name,
            email: req.user.email,
            password: req.user.password,
            is_admin: false,
        })
        .await?;

    Ok(Json(RegisterResponse {
        success: true,
        user,
    }))
}

/// POST /v1/users/login
#[utoipa::path(
    post,
    path = "/v1/users/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Wrong email or password", body = ApiErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        success: true,
        user: result.user,
        token: result.token.token,
        expires_at: result.token.expires_at,
    }))
}

/// POST /v1/users/logout
#[utoipa::path(
    post,
    path = "/v1/users/logout",
    tag = "users",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Token revoked", body = SuccessResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.user_service.logout(&auth).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// GET /v1/users/me
#[utoipa::path(
    get,
    path = "/v1/users/me",
    tag = "users",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "The caller with their brands", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
    )
)]
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.me(&auth).await?;
    Ok(Json(UserResponse { user }))
}

/// GET /v1/users/users
#[utoipa::path(
    get,
    path = "/v1/users/users",
    tag = "users",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Every account", body = UsersResponse),
        (status = 403, description = "Caller is not an admin", body = ApiErrorResponse),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.user_service.list_users(&auth).await?;
    Ok(Json(UsersResponse { users }))
}

/// GET /v1/users/user/{userId}
#[utoipa::path(
    get,
    path = "/v1/users/user/{userId}",
    tag = "users",
    security(("bearerAuth" = [])),
    params(("userId" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "The account and its audit trail", body = UserLogsResponse),
        (status = 403, description = "Caller is not an admin", body = ApiErrorResponse),
        (status = 404, description = "No such user", body = ApiErrorResponse),
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<UserLogsResponse>, ApiError> {
    let user_id = parse_uuid(&user_id, "userId")?;
    let (user, logs) = state.user_service.get_user(&auth, user_id).await?;
    Ok(Json(UserLogsResponse { user, logs }))
}
