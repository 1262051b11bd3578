//! Audit log enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Kind of entity an audit entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "log_ref_type", rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum RefType {
    /// A product image.
    Image,
    /// A user account.
    User,
    /// A brand.
    Brand,
    /// A product.
    Product,
    /// A pending brand invitation.
    OnboardingUser,
    /// A product model.
    ProductModel,
}

impl RefType {
    /// Return the reference type as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::User => "user",
            Self::Brand => "brand",
            Self::Product => "product",
            Self::OnboardingUser => "onboardingUser",
            Self::ProductModel => "productModel",
        }
    }
}

impl fmt::Display for RefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What happened to the referenced entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "log_action", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogAction {
    /// Informational entry.
    Info,
    /// The entity was created.
    Create,
    /// The entity was modified.
    Update,
    /// The entity was removed.
    Delete,
}

impl LogAction {
    /// Return the action as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
