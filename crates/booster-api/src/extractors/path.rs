//! Typed path parameter helpers.

use uuid::Uuid;

use booster_core::error::AppError;

/// Parses a UUID path segment, reporting failures against `field`.
pub fn parse_uuid(s: &str, field: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::invalid_field(field))
}
