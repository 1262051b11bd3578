//! Convenience result type alias for Booster.

use crate::error::AppError;

/// A specialized `Result` type for Booster operations.
pub type AppResult<T> = Result<T, AppError>;
