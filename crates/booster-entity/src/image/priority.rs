//! Image priority enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Display priority of a product image.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "image_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ImagePriority {
    /// The product's cover image.
    #[serde(alias = "Primary")]
    Primary,
    /// Any other image.
    #[default]
    #[serde(alias = "Secondary")]
    Secondary,
}

impl ImagePriority {
    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for ImagePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImagePriority {
    type Err = booster_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            _ => Err(booster_core::AppError::validation(format!(
                "Invalid image priority: '{s}'. Expected one of: primary, secondary"
            ))),
        }
    }
}
