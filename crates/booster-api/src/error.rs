//! Maps domain `AppError` to HTTP responses.
//!
//! Every failure is rendered as `{ "errors": [ { type, property?, info? } ] }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use booster_core::error::{AppError, ErrorKind};

/// Message shown in place of internal error details.
const INTERNAL_INFO: &str = "This is an internal error, please try again later";

/// One entry of the error envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorItem {
    /// Error category understood by clients.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Offending request property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// Human-readable details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// The errors that caused the request to fail.
    pub errors: Vec<ApiErrorItem>,
}

/// An `AppError` on its way out of a handler.
///
/// Request body validation can fail on several properties at once; the
/// envelope then carries one `validation` entry per property.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    other_fields: Vec<String>,
}

impl ApiError {
    /// A validation failure naming every offending property.
    pub fn invalid_fields(fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        match fields.next() {
            Some(first) => Self {
                error: AppError::invalid_field(&first),
                other_fields: fields.collect(),
            },
            None => AppError::validation("Invalid request body").into(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self {
            error,
            other_fields: Vec::new(),
        }
    }
}

/// HTTP status and envelope `type` for an error kind.
pub fn status_and_type(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "validation"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "accessToken"),
        ErrorKind::InvalidCredentials => (StatusCode::UNAUTHORIZED, "login"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "acl"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "notFound"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "conflict"),
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Storage
        | ErrorKind::Configuration
        | ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.error;
        let (status, error_type) = status_and_type(err.kind);

        let item = if err.kind.is_internal() {
            tracing::error!(
                kind = %err.kind,
                error = %err.message,
                source = ?err.source,
                "Internal server error"
            );
            ApiErrorItem {
                error_type: error_type.to_string(),
                property: None,
                info: Some(INTERNAL_INFO.to_string()),
            }
        } else {
            ApiErrorItem {
                error_type: error_type.to_string(),
                property: err.field,
                info: Some(err.message),
            }
        };

        let mut errors = vec![item];
        errors.extend(self.other_fields.into_iter().map(|field| {
            let invalid = AppError::invalid_field(&field);
            ApiErrorItem {
                error_type: error_type.to_string(),
                property: invalid.field,
                info: Some(invalid.message),
            }
        }));

        let body = ApiErrorResponse { errors };
        (status, Json(body)).into_response()
    }
}
